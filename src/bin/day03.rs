use std::collections::HashSet;
use std::io::BufRead;

fn priority(item: u8) -> Result<u32, String> {
    match item {
        b'a'..=b'z' => Ok((item - b'a') as u32 + 1),
        b'A'..=b'Z' => Ok((item - b'A') as u32 + 27),
        _ => Err(format!("item {:?} has no priority", item as char)),
    }
}

// The single item type present in every given rucksack section.
fn common_item(sections: &[&str]) -> Result<u8, String> {
    let mut candidates: Option<HashSet<u8>> = None;
    for section in sections {
        let items: HashSet<u8> = section.bytes().collect();
        candidates = Some(match candidates {
            None => items,
            Some(prev) => prev.intersection(&items).copied().collect(),
        });
    }
    let candidates = candidates.unwrap_or_default();
    if candidates.len() != 1 {
        return Err(format!("expected exactly one common item in {sections:?}, got {}", candidates.len()));
    }
    Ok(candidates.into_iter().next().unwrap())
}

fn read_rucksacks(r: impl BufRead) -> Result<Vec<String>, String> {
    let mut sacks = Vec::new();
    for line in r.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let line = line.trim();
        if !line.is_empty() {
            sacks.push(line.to_string());
        }
    }
    Ok(sacks)
}

fn part1(r: impl BufRead) -> Result<u32, String> {
    let mut sum = 0;
    for sack in read_rucksacks(r)? {
        if sack.len() % 2 != 0 {
            return Err(format!("rucksack {sack:?} has odd length"));
        }
        let (front, back) = sack.split_at(sack.len() / 2);
        sum += priority(common_item(&[front, back])?)?;
    }
    Ok(sum)
}

fn part2(r: impl BufRead) -> Result<u32, String> {
    let sacks = read_rucksacks(r)?;
    if sacks.len() % 3 != 0 {
        return Err(format!("{} rucksacks don't divide into groups of 3", sacks.len()));
    }
    let mut sum = 0;
    for group in sacks.chunks(3) {
        let sections: Vec<&str> = group.iter().map(String::as_str).collect();
        sum += priority(common_item(&sections)?)?;
    }
    Ok(sum)
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

#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";

    #[test]
    fn test_priority() {
        assert_eq!(priority(b'a'), Ok(1));
        assert_eq!(priority(b'z'), Ok(26));
        assert_eq!(priority(b'A'), Ok(27));
        assert_eq!(priority(b'Z'), Ok(52));
        assert!(priority(b'!').is_err());
    }

    #[test]
    fn test_common_item() {
        assert_eq!(common_item(&["vJrwpWtwJgWr", "hcsFMMfFFhFp"]), Ok(b'p'));
        assert!(common_item(&["ab", "cd"]).is_err());
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(157));
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes()), Ok(70));
    }
}
