use std::collections::VecDeque;
use std::io::BufRead;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Pos {
    x: usize,
    y: usize,
}

struct Heightmap {
    grid: Vec<Vec<u8>>,
    start: Pos,
    end: Pos,
}

impl Heightmap {
    fn read(r: impl BufRead) -> Result<Self, String> {
        let mut grid: Vec<Vec<u8>> = Vec::new();
        let mut start = None;
        let mut end = None;
        for (y, line) in r.lines().enumerate() {
            let line = line.map_err(|e| e.to_string())?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (x, b) in line.bytes().enumerate() {
                let height = match b {
                    b'S' => {
                        start = Some(Pos { x, y });
                        b'a'
                    },
                    b'E' => {
                        end = Some(Pos { x, y });
                        b'z'
                    },
                    b'a'..=b'z' => b,
                    _ => return Err(format!("unexpected square {:?}", b as char)),
                };
                row.push(height - b'a');
            }
            grid.push(row);
        }
        Ok(Heightmap {
            grid,
            start: start.ok_or("no start square")?,
            end: end.ok_or("no end square")?,
        })
    }

    fn height(&self, p: Pos) -> u8 {
        self.grid[p.y][p.x]
    }

    fn neighbors(&self, p: Pos) -> Vec<Pos> {
        let mut out = Vec::with_capacity(4);
        if p.x > 0 {
            out.push(Pos { x: p.x - 1, y: p.y });
        }
        if p.y > 0 {
            out.push(Pos { x: p.x, y: p.y - 1 });
        }
        if p.x + 1 < self.grid[p.y].len() {
            out.push(Pos { x: p.x + 1, y: p.y });
        }
        if p.y + 1 < self.grid.len() {
            out.push(Pos { x: p.x, y: p.y + 1 });
        }
        out
    }

    /// Fewest steps from `from` to any square satisfying `done`, moving only
    /// where `passable(current, next)` holds.
    fn bfs(
        &self,
        from: Pos,
        done: impl Fn(Pos) -> bool,
        passable: impl Fn(u8, u8) -> bool,
    ) -> Option<usize> {
        let mut seen = vec![vec![false; self.grid[0].len()]; self.grid.len()];
        let mut queue: VecDeque<(Pos, usize)> = VecDeque::new();
        seen[from.y][from.x] = true;
        queue.push_back((from, 0));
        while let Some((pos, steps)) = queue.pop_front() {
            if done(pos) {
                return Some(steps);
            }
            for next in self.neighbors(pos) {
                if seen[next.y][next.x] || !passable(self.height(pos), self.height(next)) {
                    continue;
                }
                seen[next.y][next.x] = true;
                queue.push_back((next, steps + 1));
            }
        }
        None
    }
}

fn part1(r: impl BufRead) -> Result<usize, String> {
    let map = Heightmap::read(r)?;
    map.bfs(map.start, |p| p == map.end, |cur, next| next <= cur + 1)
        .ok_or_else(|| "no path from start to end".to_string())
}

fn part2(r: impl BufRead) -> Result<usize, String> {
    let map = Heightmap::read(r)?;
    // Search backwards from the end so one pass covers every possible 'a'
    // trailhead; passability is the uphill rule reversed.
    map.bfs(map.end, |p| map.height(p) == 0, |cur, next| cur <= next + 1)
        .ok_or_else(|| "no path from end to any lowest square".to_string())
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
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    #[test]
    fn test_read() {
        let map = Heightmap::read(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(map.start, Pos { x: 0, y: 0 });
        assert_eq!(map.end, Pos { x: 5, y: 2 });
        assert_eq!(map.height(map.start), 0);
        assert_eq!(map.height(map.end), 25);
        assert_eq!(map.height(Pos { x: 1, y: 1 }), 1);
    }

    #[test]
    fn test_unreachable() {
        let map = Heightmap::read("Sza\nzzE".as_bytes()).unwrap();
        assert_eq!(map.bfs(map.start, |p| p == map.end, |cur, next| next <= cur + 1), None);
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(31));
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes()), Ok(29));
    }
}
