use std::io::BufRead;
use std::str::FromStr;

// An inclusive range of camp section ids.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Section {
    from: u32,
    to: u32,
}

impl Section {
    fn contains(&self, other: &Section) -> bool {
        self.from <= other.from && self.to >= other.to
    }

    fn overlaps(&self, other: &Section) -> bool {
        self.from <= other.to && other.from <= self.to
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s.split_once('-').ok_or_else(|| format!("no dash in section {s:?}"))?;
        let from = from.parse().map_err(|e| format!("bad section start in {s:?}: {e}"))?;
        let to = to.parse().map_err(|e| format!("bad section end in {s:?}: {e}"))?;
        Ok(Section { from, to })
    }
}

fn read_pairs(r: impl BufRead) -> Result<Vec<(Section, Section)>, String> {
    let mut pairs = Vec::new();
    for line in r.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (a, b) = line.split_once(',').ok_or_else(|| format!("no comma in line {line:?}"))?;
        pairs.push((a.parse()?, b.parse()?));
    }
    Ok(pairs)
}

fn part1(r: impl BufRead) -> Result<usize, String> {
    let pairs = read_pairs(r)?;
    Ok(pairs.iter().filter(|(a, b)| a.contains(b) || b.contains(a)).count())
}

fn part2(r: impl BufRead) -> Result<usize, String> {
    let pairs = read_pairs(r)?;
    Ok(pairs.iter().filter(|(a, b)| a.overlaps(b)).count())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args[..] {
        ["part1"] => Ok(println!("{}", part1(std::io::stdin().lock())?)),
        ["part2"] => Ok(println!("{}", part2(std::io::stdin().lock())?)),
        _ => Err("must specify part1|part2".to_string()),
    }
}
