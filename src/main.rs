use multiway_btree::{BTree, Outcome};
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Ends the list of keys to insert
const SENTINEL: i64 = -999;

/// Read keys until `SENTINEL`, then one key to search for
fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Enter list of positive integers ending with {}:", SENTINEL)?;
    out.flush()?;

    let mut tree = BTree::new();
    let mut tokens = Tokens::new(stdin.lock());
    while let Some(key) = tokens.next_key()? {
        if key == SENTINEL {
            break;
        }
        if tree.insert(key) == Outcome::Duplicate {
            writeln!(out, "Cannot insert duplicate record.")?;
        }
    }

    write!(out, "Enter a number to search: ")?;
    out.flush()?;
    match tokens.next_key()? {
        Some(key) if tree.search(&key) => writeln!(out, "{} is found in the tree.", key)?,
        Some(key) => writeln!(out, "{} is not found in the tree.", key)?,
        None => writeln!(out)?,
    }
    Ok(())
}

/// Whitespace separated integers, read line by line
struct Tokens<R: BufRead> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens {
            input,
            pending: vec![],
        }
    }

    /// Return the next integer, or `None` at end of input
    fn next_key(&mut self) -> Result<Option<i64>, Box<dyn Error>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        match self.pending.pop() {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|err| format!("Invalid key {:?}: {}", token, err).into()),
        }
    }
}
