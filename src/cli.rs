use clap::Parser;

use crate::game::Position;

#[derive(Parser, Debug)]
#[command(name = "shoe_puzzle")]
#[command(about = "Block-and-shoes sliding puzzle driven over JSON lines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting positions of the block, red, blue and black shoe, as "row,col"
    #[arg(long, num_args = 4, value_names = ["BLOCK", "RED", "BLUE", "BLACK"])]
    pub layout: Option<Vec<Position>>,

    /// Keep the solved position instead of starting over
    #[arg(long)]
    pub no_auto_reset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_takes_four_positions() {
        let cli = Cli::try_parse_from(["shoe_puzzle", "--layout", "0,0", "2,0", "(1,1)", "0,2"]).unwrap();
        assert_eq!(
            cli.layout,
            Some(vec![
                Position::new(0, 0),
                Position::new(2, 0),
                Position::new(1, 1),
                Position::new(0, 2),
            ])
        );
        assert!(!cli.no_auto_reset);

        assert!(Cli::try_parse_from(["shoe_puzzle", "--layout", "0,0", "2,0"]).is_err());
        assert!(Cli::try_parse_from(["shoe_puzzle", "--layout", "0,0", "2,0", "1,1", "x"]).is_err());
    }
}
