use std::error::Error;
use std::io::Read;

fn all_distinct(window: &[u8]) -> bool {
    let mut seen = [false; 256];
    for &b in window {
        if seen[b as usize] {
            return false;
        }
        seen[b as usize] = true;
    }
    true
}

/// Number of characters consumed before `width` distinct ones appear in a row,
/// or None if the stream never contains such a window.
fn find_marker(stream: &str, width: usize) -> Option<usize> {
    let bytes = stream.trim().as_bytes();
    bytes
        .windows(width)
        .position(all_distinct)
        .map(|i| i + width)
}

fn part1(r: impl Read) -> Result<usize, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    find_marker(&input, 4).ok_or_else(|| "no start-of-packet marker".into())
}

fn part2(r: impl Read) -> Result<usize, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    find_marker(&input, 14).ok_or_else(|| "no start-of-message marker".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args[..] {
        ["part1"] => println!("{}", part1(std::io::stdin().lock())?),
        ["part2"] => println!("{}", part2(std::io::stdin().lock())?),
        _ => return Err("must specify part1|part2".into()),
    }
    Ok(())
}
