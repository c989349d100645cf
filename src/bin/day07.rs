use std::collections::HashMap;
use std::io::BufRead;

const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;

/// Replay a shell transcript and return the total size of every directory,
/// keyed by its path components from the root.
fn directory_sizes(r: impl BufRead) -> Result<HashMap<Vec<String>, u64>, String> {
    let mut sizes: HashMap<Vec<String>, u64> = HashMap::new();
    let mut cwd: Vec<String> = Vec::new();
    sizes.insert(Vec::new(), 0);

    for line in r.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let line = line.trim();
        match line.split_whitespace().collect::<Vec<&str>>()[..] {
            [] => (),
            ["$", "cd", "/"] => cwd.clear(),
            ["$", "cd", ".."] => {
                if cwd.pop().is_none() {
                    return Err("cd .. above the root".to_string());
                }
            },
            ["$", "cd", name] => {
                cwd.push(name.to_string());
                sizes.entry(cwd.clone()).or_insert(0);
            },
            ["$", "ls"] => (),
            ["dir", name] => {
                let mut path = cwd.clone();
                path.push(name.to_string());
                sizes.entry(path).or_insert(0);
            },
            [size, _name] => {
                let size: u64 = size.parse().map_err(|_| format!("unexpected transcript line: {line}"))?;
                // A file counts toward its directory and every ancestor.
                let mut path = cwd.clone();
                loop {
                    *sizes.entry(path.clone()).or_insert(0) += size;
                    if path.pop().is_none() {
                        break;
                    }
                }
            },
            _ => return Err(format!("unexpected transcript line: {line}")),
        }
    }
    Ok(sizes)
}

fn part1(r: impl BufRead) -> Result<u64, String> {
    let sizes = directory_sizes(r)?;
    Ok(sizes.values().filter(|&&size| size <= 100_000).sum())
}

fn part2(r: impl BufRead) -> Result<u64, String> {
    let sizes = directory_sizes(r)?;
    let used = sizes[&Vec::new()];
    let free = DISK_SIZE - used;
    if free >= UPDATE_SIZE {
        return Err("nothing needs deleting".to_string());
    }
    let needed = UPDATE_SIZE - free;
    sizes
        .values()
        .filter(|&&size| size >= needed)
        .min()
        .copied()
        .ok_or_else(|| "no single directory is big enough".to_string())
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
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_directory_sizes() {
        let sizes = directory_sizes(EXAMPLE.as_bytes()).unwrap();
        assert_eq!(sizes[&path(&["a", "e"])], 584);
        assert_eq!(sizes[&path(&["a"])], 94853);
        assert_eq!(sizes[&path(&["d"])], 24933642);
        assert_eq!(sizes[&path(&[])], 48381165);
    }

    #[test]
    fn test_cd_above_root() {
        assert!(directory_sizes("$ cd ..".as_bytes()).is_err());
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()), Ok(95437));
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE.as_bytes()), Ok(24933642));
    }
}
