/// Unique goal identifier (stable across runs).
/// Example: `WIS-12`
pub type GoalId = String;
/// Curriculum area a goal belongs to.
/// Examples: `Wiskunde`, `Nederlands en communicatie`
pub type Subject = String;
/// Identifier of a reference document.
/// Example: `Opstap_visie-wiskunde.pdf`
pub type DocumentId = String;
/// Lowercase lexical term extracted from free text.
/// Example: `getallen`
pub type Term = String;
/// Normalized vocabulary phrase of one to three words.
/// Examples: `tellen`, `grote wijzer`
pub type VocabPhrase = String;
/// Sentence text extracted from a document page.
/// Example: `Kinderen leren tellen door voorwerpen in concrete situaties te ordenen.`
pub type Sentence = String;
/// Raw text of a single document page.
pub type PageText = String;
/// Classification value (domain, sub-domain, cluster, fine codes).
/// Examples: `Getallen`, `tijd`, `1.2.3`
pub type ClassValue = String;
