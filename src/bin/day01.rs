use std::error::Error;
use std::io::Read;

/// Sum up the calories each elf carries. Elves are separated by blank lines.
fn elf_totals(input: &str) -> Result<Vec<u32>, Box<dyn Error>> {
    let mut totals: Vec<u32> = Vec::new();
    let mut sum: u32 = 0;
    let mut pending = false;
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if pending {
                totals.push(sum);
            }
            sum = 0;
            pending = false;
        } else {
            sum += line.parse::<u32>().map_err(|e| format!("bad calorie line {line:?}: {e}"))?;
            pending = true;
        }
    }
    if pending {
        totals.push(sum);
    }
    Ok(totals)
}

fn part1(r: impl Read) -> Result<u32, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    let totals = elf_totals(&input)?;
    totals.iter().max().copied().ok_or_else(|| "no elves in input".into())
}

fn part2(r: impl Read) -> Result<u32, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    let mut totals = elf_totals(&input)?;
    totals.sort_unstable_by(|a, b| b.cmp(a));
    Ok(totals.iter().take(3).sum())
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
