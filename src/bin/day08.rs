use std::io::BufRead;

struct Forest {
    heights: Vec<Vec<i8>>,
    rows: usize,
    cols: usize,
}

impl Forest {
    fn read(r: impl BufRead) -> Result<Self, String> {
        let mut heights: Vec<Vec<i8>> = Vec::new();
        for line in r.lines() {
            let line = line.map_err(|e| e.to_string())?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row: Vec<i8> = line
                .bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok((b - b'0') as i8),
                    _ => Err(format!("unexpected tree height {:?}", b as char)),
                })
                .collect::<Result<_, _>>()?;
            if let Some(first) = heights.first() {
                if row.len() != first.len() {
                    return Err("ragged forest rows".to_string());
                }
            }
            heights.push(row);
        }
        let rows = heights.len();
        let cols = heights.first().map_or(0, Vec::len);
        Ok(Forest { heights, rows, cols })
    }

    // Walk from (x, y) in one direction, counting trees until the view is
    // blocked. Returns the count and whether the walk reached the edge.
    fn view(&self, x: usize, y: usize, dx: isize, dy: isize) -> (usize, bool) {
        let own = self.heights[y][x];
        let mut seen = 0;
        let (mut cx, mut cy) = (x as isize, y as isize);
        loop {
            cx += dx;
            cy += dy;
            if cx < 0 || cy < 0 || cx >= self.cols as isize || cy >= self.rows as isize {
                return (seen, true);
            }
            seen += 1;
            if self.heights[cy as usize][cx as usize] >= own {
                return (seen, false);
            }
        }
    }

    fn visible_from_edge(&self, x: usize, y: usize) -> bool {
        DIRECTIONS.iter().any(|&(dx, dy)| self.view(x, y, dx, dy).1)
    }

    fn scenic_score(&self, x: usize, y: usize) -> usize {
        DIRECTIONS.iter().map(|&(dx, dy)| self.view(x, y, dx, dy).0).product()
    }
}

const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

fn part1(r: impl BufRead) -> Result<usize, String> {
    let forest = Forest::read(r)?;
    let mut visible = 0;
    for y in 0..forest.rows {
        for x in 0..forest.cols {
            if forest.visible_from_edge(x, y) {
                visible += 1;
            }
        }
    }
    Ok(visible)
}

fn part2(r: impl BufRead) -> Result<usize, String> {
    let forest = Forest::read(r)?;
    let mut best = 0;
    for y in 0..forest.rows {
        for x in 0..forest.cols {
            best = best.max(forest.scenic_score(x, y));
        }
    }
    Ok(best)
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
30373
25512
65332
33549
35390";

    #[test]
    fn test_read() {
        let forest = Forest::read(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(forest.rows, 5);
        assert_eq!(forest.cols, 5);
        assert_eq!(forest.heights[3][2], 5);
    }

    #[test]
    fn test_scenic_score() {
        let forest = Forest::read(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(forest.scenic_score(2, 1), 4);
        assert_eq!(forest.scenic_score(2, 3), 8);
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(21));
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes()), Ok(8));
    }
}
