use std::fs::File;
use std::io::{BufWriter, Write};
use rand::Rng;

const FILE_NAME: &str = "ops.txt";
const INSERT_COUNT: usize = 10_000;
const LOOKUP_COUNT: usize = 1_000;
const MAX_VALUE: i32 = 100_000;
const MAX_KEY: i32 = 1_000;
const TERMINATOR: i32 = -1;

// Menu choices understood by the hash_table binary
const CHOICE_INSERT: u8 = 1;
const CHOICE_SEARCH: u8 = 2;
const CHOICE_DELETE: u8 = 3;
const CHOICE_DISPLAY: u8 = 4;
const CHOICE_EXIT: u8 = 5;

#[derive(Debug, Clone, Copy)]
struct Pair {
    value: i32,
    key: i32,
}

impl Pair {
    fn generate(rng: &mut impl Rng) -> Self {
        Self {
            value: rng.gen_range(0..MAX_VALUE),
            key: rng.gen_range(0..MAX_KEY),
        }
    }

    // Values above MAX_VALUE are never inserted
    fn generate_absent(rng: &mut impl Rng) -> Self {
        Self {
            value: rng.gen_range(MAX_VALUE..MAX_VALUE * 2),
            key: rng.gen_range(0..MAX_KEY),
        }
    }

    fn to_line(self) -> String {
        format!("{} {}", self.value, self.key)
    }
}

fn write_lookups(writer: &mut impl Write, choice: u8, inserted: &[Pair], rng: &mut impl Rng) -> std::io::Result<()> {
    for _ in 0..LOOKUP_COUNT {
        // Roughly one lookup in four misses
        let pair = if rng.gen_bool(0.75) {
            inserted[rng.gen_range(0..inserted.len())]
        } else {
            Pair::generate_absent(rng)
        };
        writeln!(writer, "{}", choice)?;
        writeln!(writer, "{}", pair.to_line())?;
    }
    Ok(())
}

fn write_script(writer: &mut impl Write, rng: &mut impl Rng) -> std::io::Result<()> {
    let inserted: Vec<Pair> = (0..INSERT_COUNT).map(|_| Pair::generate(rng)).collect();

    writeln!(writer, "{}", CHOICE_INSERT)?;
    for pair in &inserted {
        writeln!(writer, "{}", pair.to_line())?;
    }
    // The menu reads a key after the terminator as well
    writeln!(writer, "{} 0", TERMINATOR)?;

    write_lookups(writer, CHOICE_SEARCH, &inserted, rng)?;
    write_lookups(writer, CHOICE_DELETE, &inserted, rng)?;

    writeln!(writer, "{}", CHOICE_DISPLAY)?;
    writeln!(writer, "{}", CHOICE_EXIT)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let file = File::create(FILE_NAME)?;
    let mut writer = BufWriter::new(file);

    write_script(&mut writer, &mut rand::thread_rng())?;

    writer.flush()?;
    println!("File generated successfully: {}", FILE_NAME);
    Ok(())
}
