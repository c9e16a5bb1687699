use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::{info, warn};

use crate::chained_hash_table::ChainedHashTable;
use crate::error::SessionError;

const TERMINATOR: i32 = -1;

const MENU: &str = "\n\n1.Create a Hash Table for separate chaining\
                    \n2.Searching an item from the Hash Table\
                    \n3.Delete an item from Hash Table\
                    \n4.Display the Hash Table\
                    \n5.Exit from the program";

enum Flow {
    Continue,
    Exit,
}

/// Console menu driving a [`ChainedHashTable`].
///
/// Input is read as whitespace separated integers, so a whole session can be
/// scripted on a single line. Any choice above 4, or the end of input, ends
/// the session.
pub struct Session<R, W> {
    table: ChainedHashTable,
    input: R,
    output: W,
    tokens: VecDeque<String>,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            table: ChainedHashTable::new(),
            input,
            output,
            tokens: VecDeque::new(),
            quiet: false,
        }
    }

    /// Suppresses the menu and prompts; results are still written.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn into_table(self) -> ChainedHashTable {
        self.table
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("menu session started");

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(SessionError::InvalidNumber(token)) => {
                    warn!("rejected input token {:?}", token);
                    writeln!(self.output, "\nInvalid number: {}", token)?;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(self.output, "\nYour input has terminated the program")?;
        self.output.flush()?;
        info!("menu session finished with {} entries", self.table.len());
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, SessionError> {
        if !self.quiet {
            write!(self.output, "{}", MENU)?;
        }
        let choice = match self.read_number("\nEnter your choice : ")? {
            Some(choice) => choice,
            None => return Ok(Flow::Exit),
        };

        match choice {
            1 => self.bulk_insert(),
            2 => self.search(),
            3 => self.delete(),
            4 => self.display(),
            c if c > 4 => Ok(Flow::Exit),
            _ => Ok(Flow::Continue),
        }
    }

    fn bulk_insert(&mut self) -> Result<Flow, SessionError> {
        self.prompt("\nEnter -1 to terminate")?;
        loop {
            let (item, key) = match self.read_pair("\nEnter the data item : ", "\nEnter the key value : ")? {
                Some(pair) => pair,
                None => return Ok(Flow::Exit),
            };
            if item == TERMINATOR {
                break;
            }
            self.table.insert(item, key);
        }

        writeln!(self.output, "\nHash Table is created")?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow, SessionError> {
        let (item, key) = match self.read_pair(
            "\nEnter the data item you want to search : ",
            "\nEnter the key value of the data : ",
        )? {
            Some(pair) => pair,
            None => return Ok(Flow::Exit),
        };

        match self.table.search(item, key) {
            Some(found) => writeln!(
                self.output,
                "\nItem {} with key value {} is found at {}",
                found.entry.info(),
                key,
                found.location
            )?,
            None => writeln!(self.output, "\nItem {} with key value {} is not present", item, key)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow, SessionError> {
        let (item, key) = match self.read_pair(
            "\nEnter the data item you want to delete : ",
            "\nEnter the key value of the data : ",
        )? {
            Some(pair) => pair,
            None => return Ok(Flow::Exit),
        };

        match self.table.delete(item, key) {
            Ok(location) => writeln!(
                self.output,
                "\nItem {} with key value {} is deleted from {}",
                item, key, location
            )?,
            Err(_) => writeln!(self.output, "\nItem {} with key value {} is not present", item, key)?,
        }
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.output, "\n{}", self.table)?;
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        if !self.quiet {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn read_pair(&mut self, item_prompt: &str, key_prompt: &str) -> Result<Option<(i32, i32)>, SessionError> {
        let item = match self.read_number(item_prompt)? {
            Some(item) => item,
            None => return Ok(None),
        };
        Ok(self.read_number(key_prompt)?.map(|key| (item, key)))
    }

    fn read_number(&mut self, prompt: &str) -> Result<Option<i32>, SessionError> {
        self.prompt(prompt)?;
        match self.next_token()? {
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| SessionError::InvalidNumber(token)),
            None => Ok(None),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.tokens.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_script(script: &str) -> (ChainedHashTable, String) {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(script), &mut output).with_quiet(true);
        session.run().unwrap();
        let table = session.into_table();
        (table, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_scripted_session() {
        let (table, output) = run_script("1\n5 15\n25 25\n-1 0\n2 5 5\n3 25 5\n4\n5\n");

        assert_eq!(table.len(), 1);
        assert!(output.contains("Hash Table is created"));
        assert!(output.contains("Item 5 with key value 5 is found at bucket 5 position 1"));
        assert!(output.contains("Item 25 with key value 5 is deleted from bucket 5 position 0"));
        assert!(output.contains("Key 5 : 5\n"));
        assert!(output.contains("Key 4 : No value at this key"));
        assert!(output.ends_with("Your input has terminated the program\n"));
    }

    #[test]
    fn test_missing_items_are_reported() {
        let (table, output) = run_script("2 1 1 3 1 1 9");

        assert!(table.is_empty());
        assert_eq!(output.matches("Item 1 with key value 1 is not present").count(), 2);
    }

    #[test]
    fn test_end_of_input_mid_insert() {
        let (table, output) = run_script("1 3 3 4");

        assert_eq!(table.len(), 1);
        assert!(!output.contains("Hash Table is created"));
    }

    #[test]
    fn test_invalid_token_resumes_menu() {
        let (table, output) = run_script("abc\n1 2 2 -1 -1\n7");

        assert_eq!(table.len(), 1);
        assert!(output.contains("Invalid number: abc"));
    }

    #[test]
    fn test_choices_below_one_redisplay_menu() {
        let mut output = Vec::new();
        Session::new(Cursor::new("0 -3 6"), &mut output).run().unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.matches("5.Exit from the program").count(), 3);
        assert_eq!(output.matches("Enter your choice : ").count(), 3);
    }

    #[test]
    fn test_empty_input() {
        let (table, output) = run_script("");

        assert!(table.is_empty());
        assert_eq!(output, "\nYour input has terminated the program\n");
    }
}
