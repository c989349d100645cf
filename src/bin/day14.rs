use std::collections::HashSet;
use std::io::BufRead;

const SOURCE: (i32, i32) = (500, 0);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Fill {
    Rock,
    Sand,
}

struct Cave {
    filled: HashSet<(i32, i32)>,
    sand: HashSet<(i32, i32)>,
    // Lowest rock; everything below is the abyss (or the floor in part 2).
    max_y: i32,
    floor: Option<i32>,
}

impl Cave {
    fn read(r: impl BufRead) -> Result<Self, String> {
        let mut filled = HashSet::new();
        let mut max_y = 0;
        for line in r.lines() {
            let line = line.map_err(|e| e.to_string())?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let corners: Vec<(i32, i32)> = line
                .split(" -> ")
                .map(|pair| {
                    let (x, y) = pair.split_once(',').ok_or_else(|| format!("bad point {pair:?}"))?;
                    Ok((
                        x.parse().map_err(|e| format!("bad x in {pair:?}: {e}"))?,
                        y.parse().map_err(|e| format!("bad y in {pair:?}: {e}"))?,
                    ))
                })
                .collect::<Result<_, String>>()?;
            for pair in corners.windows(2) {
                let (x0, y0) = pair[0];
                let (x1, y1) = pair[1];
                if x0 != x1 && y0 != y1 {
                    return Err(format!("diagonal rock segment in {line:?}"));
                }
                for x in x0.min(x1)..=x0.max(x1) {
                    for y in y0.min(y1)..=y0.max(y1) {
                        filled.insert((x, y));
                        max_y = max_y.max(y);
                    }
                }
            }
        }
        Ok(Cave { filled, sand: HashSet::new(), max_y, floor: None })
    }

    fn with_floor(mut self) -> Self {
        self.floor = Some(self.max_y + 2);
        self
    }

    fn blocked(&self, x: i32, y: i32) -> bool {
        self.filled.contains(&(x, y)) || self.floor.is_some_and(|f| y >= f)
    }

    /// Drop one unit from the source. Returns where it came to rest, or None
    /// if it fell into the abyss or the source is already plugged.
    fn drop_unit(&mut self) -> Option<(i32, i32)> {
        if self.blocked(SOURCE.0, SOURCE.1) {
            return None;
        }
        let (mut x, mut y) = SOURCE;
        loop {
            if self.floor.is_none() && y > self.max_y {
                return None;
            }
            if !self.blocked(x, y + 1) {
                y += 1;
            } else if !self.blocked(x - 1, y + 1) {
                x -= 1;
                y += 1;
            } else if !self.blocked(x + 1, y + 1) {
                x += 1;
                y += 1;
            } else {
                self.filled.insert((x, y));
                self.sand.insert((x, y));
                return Some((x, y));
            }
        }
    }

    fn fill_with_sand(&mut self) -> usize {
        let mut units = 0;
        while self.drop_unit().is_some() {
            units += 1;
        }
        units
    }

    #[cfg(test)]
    fn render(&self, x0: i32, x1: i32) -> String {
        let y1 = self.floor.map_or(self.max_y, |f| f);
        let mut out = String::new();
        for y in 0..=y1 {
            if y > 0 {
                out.push('\n');
            }
            for x in x0..=x1 {
                out.push(match self.at(x, y) {
                    _ if (x, y) == SOURCE && !self.sand.contains(&SOURCE) => '+',
                    Some(Fill::Rock) => '#',
                    Some(Fill::Sand) => 'o',
                    None => '.',
                });
            }
        }
        out
    }

    #[cfg(test)]
    fn at(&self, x: i32, y: i32) -> Option<Fill> {
        if self.sand.contains(&(x, y)) {
            Some(Fill::Sand)
        } else if self.blocked(x, y) {
            Some(Fill::Rock)
        } else {
            None
        }
    }
}

fn part1(r: impl BufRead) -> Result<usize, String> {
    let mut cave = Cave::read(r)?;
    Ok(cave.fill_with_sand())
}

fn part2(r: impl BufRead) -> Result<usize, String> {
    let mut cave = Cave::read(r)?.with_floor();
    Ok(cave.fill_with_sand())
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
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9";

    #[test]
    fn test_read() {
        let cave = Cave::read(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(cave.max_y, 9);
        let want = "\
......+...
..........
..........
..........
....#...##
....#...#.
..###...#.
........#.
........#.
#########.";
        assert_eq!(cave.render(494, 503), want);
    }

    #[test]
    fn test_first_units_settle() {
        let mut cave = Cave::read(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(cave.drop_unit(), Some((500, 8)));
        assert_eq!(cave.drop_unit(), Some((499, 8)));
        assert_eq!(cave.drop_unit(), Some((501, 8)));
        assert_eq!(cave.drop_unit(), Some((500, 7)));
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(24));
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes()), Ok(93));
    }
}
