use std::collections::HashSet;
use std::io::BufRead;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Cube {
    x: i32,
    y: i32,
    z: i32,
}

impl Cube {
    fn neighbors(&self) -> [Cube; 6] {
        let &Cube { x, y, z } = self;
        [
            Cube { x: x - 1, y, z },
            Cube { x: x + 1, y, z },
            Cube { x, y: y - 1, z },
            Cube { x, y: y + 1, z },
            Cube { x, y, z: z - 1 },
            Cube { x, y, z: z + 1 },
        ]
    }
}

impl FromStr for Cube {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<i32> = s
            .trim()
            .split(',')
            .map(|v| v.parse().map_err(|e| format!("bad coordinate in {s:?}: {e}")))
            .collect::<Result<_, _>>()?;
        let [x, y, z] = parts[..] else {
            return Err(format!("expected x,y,z in {s:?}"));
        };
        Ok(Cube { x, y, z })
    }
}

fn read_droplet(r: impl BufRead) -> Result<HashSet<Cube>, String> {
    r.lines()
        .map(|line| line.map_err(|e| e.to_string()))
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| line.and_then(|l| l.parse()))
        .collect()
}

fn surface_area(droplet: &HashSet<Cube>) -> usize {
    droplet
        .iter()
        .flat_map(Cube::neighbors)
        .filter(|n| !droplet.contains(n))
        .count()
}

/// Faces reachable from outside: flood-fill steam through a bounding box one
/// cube wider than the droplet and count every lava face the steam touches.
fn exterior_surface_area(droplet: &HashSet<Cube>) -> usize {
    if droplet.is_empty() {
        return 0;
    }
    let min = |f: fn(&Cube) -> i32| droplet.iter().map(f).min().unwrap() - 1;
    let max = |f: fn(&Cube) -> i32| droplet.iter().map(f).max().unwrap() + 1;
    let (x0, x1) = (min(|c| c.x), max(|c| c.x));
    let (y0, y1) = (min(|c| c.y), max(|c| c.y));
    let (z0, z1) = (min(|c| c.z), max(|c| c.z));

    let mut faces = 0;
    let mut steam: HashSet<Cube> = HashSet::new();
    let mut stack = vec![Cube { x: x0, y: y0, z: z0 }];
    steam.insert(stack[0]);
    while let Some(cube) = stack.pop() {
        for next in cube.neighbors() {
            if next.x < x0 || next.x > x1 || next.y < y0 || next.y > y1 || next.z < z0 || next.z > z1 {
                continue;
            }
            if droplet.contains(&next) {
                faces += 1;
            } else if steam.insert(next) {
                stack.push(next);
            }
        }
    }
    faces
}

fn part1(r: impl BufRead) -> Result<usize, String> {
    let droplet = read_droplet(r)?;
    Ok(surface_area(&droplet))
}

fn part2(r: impl BufRead) -> Result<usize, String> {
    let droplet = read_droplet(r)?;
    Ok(exterior_surface_area(&droplet))
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
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5";

    #[test]
    fn test_parse() {
        let droplet = read_droplet(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(droplet.len(), 13);
        assert!(droplet.contains(&Cube { x: 2, y: 2, z: 6 }));
        assert!("1,2".parse::<Cube>().is_err());
        assert!("1,2,three".parse::<Cube>().is_err());
    }

    #[test]
    fn test_two_cubes() {
        let droplet: HashSet<Cube> = ["1,1,1", "2,1,1"].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(surface_area(&droplet), 10);
        assert_eq!(exterior_surface_area(&droplet), 10);
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(64));
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes()), Ok(58));
    }
}
