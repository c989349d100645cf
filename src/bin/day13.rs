use std::cmp::Ordering;
use std::io::Read;
use std::str::FromStr;

#[derive(Clone, PartialEq, Eq, Debug)]
enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Packet {
    // Recursive descent over one packet starting at bytes[i]; returns the
    // parsed value and the index just past it.
    fn parse_at(bytes: &[u8], mut i: usize) -> Result<(Packet, usize), String> {
        match bytes.get(i).copied() {
            Some(b'[') => {
                i += 1;
                let mut items = Vec::new();
                loop {
                    match bytes.get(i).copied() {
                        Some(b']') => return Ok((Packet::List(items), i + 1)),
                        Some(b',') => i += 1,
                        Some(_) => {
                            let (item, next) = Packet::parse_at(bytes, i)?;
                            items.push(item);
                            i = next;
                        },
                        None => return Err("unterminated list".to_string()),
                    }
                }
            },
            Some(b'0'..=b'9') => {
                let start = i;
                while matches!(bytes.get(i).copied(), Some(b'0'..=b'9')) {
                    i += 1;
                }
                let text = std::str::from_utf8(&bytes[start..i]).unwrap();
                Ok((Packet::Int(text.parse().map_err(|e| format!("bad number: {e}"))?), i))
            },
            other => Err(format!("unexpected byte {other:?} at {i}")),
        }
    }
}

impl FromStr for Packet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (packet, consumed) = Packet::parse_at(s.as_bytes(), 0)?;
        if consumed != s.len() {
            return Err(format!("trailing garbage in packet {s:?}"));
        }
        Ok(packet)
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            // A lone number compares as a one-element list.
            (Packet::Int(a), Packet::List(_)) => Packet::List(vec![Packet::Int(*a)]).cmp(other),
            (Packet::List(_), Packet::Int(b)) => self.cmp(&Packet::List(vec![Packet::Int(*b)])),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn read_packets(r: impl Read) -> Result<Vec<Packet>, String> {
    let input = std::io::read_to_string(r).map_err(|e| e.to_string())?;
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(Packet::from_str)
        .collect()
}

fn part1(r: impl Read) -> Result<usize, String> {
    let packets = read_packets(r)?;
    if packets.len() % 2 != 0 {
        return Err("packets don't come in pairs".to_string());
    }
    // Pairs are numbered from 1.
    Ok(packets
        .chunks(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < pair[1])
        .map(|(i, _)| i + 1)
        .sum())
}

fn part2(r: impl Read) -> Result<usize, String> {
    let mut packets = read_packets(r)?;
    let dividers: [Packet; 2] = ["[[2]]".parse()?, "[[6]]".parse()?];
    packets.extend(dividers.iter().cloned());
    packets.sort();
    let key = dividers
        .iter()
        .map(|d| packets.binary_search(d).expect("divider was inserted") + 1)
        .product();
    Ok(key)
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
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]";

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<Packet>(), Ok(Packet::Int(7)));
        assert_eq!(
            "[1,[2],3]".parse::<Packet>(),
            Ok(Packet::List(vec![
                Packet::Int(1),
                Packet::List(vec![Packet::Int(2)]),
                Packet::Int(3),
            ]))
        );
        assert!("[1,".parse::<Packet>().is_err());
        assert!("[1]]".parse::<Packet>().is_err());
    }

    #[test]
    fn test_ordering() {
        let lt = |a: &str, b: &str| {
            a.parse::<Packet>().unwrap() < b.parse::<Packet>().unwrap()
        };
        assert!(lt("[1,1,3,1,1]", "[1,1,5,1,1]"));
        assert!(lt("[[1],[2,3,4]]", "[[1],4]"));
        assert!(!lt("[9]", "[[8,7,6]]"));
        assert!(lt("[]", "[3]"));
        assert!(!lt("[[[]]]", "[[]]"));
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(13));
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes()), Ok(140));
    }
}
