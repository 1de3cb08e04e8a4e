use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no confirmation on stdin. Anything but y/yes is a no.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    read_yes(io::stdin().lock())
}

fn read_yes<R: BufRead>(mut input: R) -> bool {
    let mut s = String::new();
    if input.read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_confirms() {
        assert!(read_yes("y\n".as_bytes()));
        assert!(read_yes(" YES \n".as_bytes()));
        assert!(!read_yes("n\n".as_bytes()));
        assert!(!read_yes("".as_bytes()));
    }
}
