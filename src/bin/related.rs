use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    related_content::apps::run_related_cli(std::env::args().skip(1))
}
