// src/cli/mod.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// API server port (overrides PORT)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind the API server to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_port_and_host() {
        let args = Args::parse_from(["password_generator", "--port", "8081", "--host", "localhost"]);
        assert_eq!(args.port, Some(8081));
        assert_eq!(args.host.as_deref(), Some("localhost"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::parse_from(["password_generator"]);
        assert!(args.port.is_none());
        assert!(args.host.is_none());
    }
}
