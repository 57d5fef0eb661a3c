use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    goalmine::app::run_generate(std::env::args().skip(1))
}
