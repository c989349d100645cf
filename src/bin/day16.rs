use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use once_cell::unsync::Lazy;
use regex_lite::Regex;

const HORIZON: u32 = 30;

#[derive(PartialEq, Eq, Debug)]
enum SolveError {
    /// A line didn't match the valve grammar. Parsing aborts on the first
    /// offender; there is no partial graph.
    Parse { line: String },
    /// The frontier emptied without any complete path from the start valve,
    /// which means the graph is malformed or disconnected.
    SearchExhausted,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Parse { line } => write!(f, "unexpected valve line: {line}"),
            SolveError::SearchExhausted => write!(f, "no path from the start valve"),
        }
    }
}

impl Error for SolveError {}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct ValveId(u8);

/// The tunnel network: valve names, flow rates, and undirected tunnels,
/// immutable once parsed.
struct Cave {
    names: Vec<String>,
    rates: Vec<u32>,
    tunnels: Vec<Vec<ValveId>>,
    ids: HashMap<String, ValveId>,
}

impl Cave {
    fn id(&self, name: &str) -> Option<ValveId> {
        self.ids.get(name).copied()
    }

    fn name(&self, v: ValveId) -> &str {
        &self.names[v.0 as usize]
    }

    fn rate(&self, v: ValveId) -> u32 {
        self.rates[v.0 as usize]
    }

    fn neighbors(&self, v: ValveId) -> &[ValveId] {
        &self.tunnels[v.0 as usize]
    }

    /// Valves worth opening: flow rate above zero.
    fn active(&self) -> impl Iterator<Item = ValveId> + '_ {
        (0..self.names.len() as u8)
            .map(ValveId)
            .filter(|&v| self.rate(v) > 0)
    }
}

impl FromStr for Cave {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // eg: Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
        let line_re = Lazy::new(|| {
            Regex::new(r#"Valve ([A-Z]+) has flow rate=(\d+); tunnels? leads? to valves? ([A-Z, ]+)"#).unwrap()
        });
        let mut cave = Cave {
            names: Vec::new(),
            rates: Vec::new(),
            tunnels: Vec::new(),
            ids: HashMap::new(),
        };
        fn intern(cave: &mut Cave, name: &str) -> ValveId {
            match cave.ids.get(name) {
                Some(&v) => v,
                None => {
                    let v = ValveId(cave.names.len() as u8);
                    cave.ids.insert(name.to_string(), v);
                    cave.names.push(name.to_string());
                    cave.rates.push(0);
                    cave.tunnels.push(Vec::new());
                    v
                },
            }
        }
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let parse_err = || SolveError::Parse { line: line.to_string() };
            let caps = line_re.captures(line).ok_or_else(|| parse_err())?;
            let src = intern(&mut cave, &caps[1]);
            cave.rates[src.0 as usize] = caps[2].parse().map_err(|_| parse_err())?;
            let dsts: Vec<ValveId> = caps[3]
                .split(", ")
                .map(|name| intern(&mut cave, name))
                .collect();
            cave.tunnels[src.0 as usize] = dsts;
        }
        Ok(cave)
    }
}

/// One node in the search tree. Expansion copies the parent and owns its own
/// open-set and path; branches never share state.
#[derive(Clone, Debug)]
struct PathState {
    at: ValveId,
    minute: u32,
    rate: u32,
    released: u32,
    open: HashSet<ValveId>,
    path: Vec<ValveId>,
}

impl PathState {
    fn start(at: ValveId) -> Self {
        PathState {
            at,
            minute: 1,
            rate: 0,
            released: 0,
            open: HashSet::new(),
            path: vec![at],
        }
    }

    /// Walk to a neighboring valve, optionally spending a second minute to
    /// open it. The move minute accrues at the old rate, the opening minute at
    /// the new one.
    fn step(&self, cave: &Cave, to: ValveId, open_it: bool) -> PathState {
        let mut next = self.clone();
        next.at = to;
        next.path.push(to);
        next.minute += 1;
        next.released += self.rate;
        if open_it {
            debug_assert!(cave.rate(to) > 0 && !next.open.contains(&to));
            next.open.insert(to);
            next.rate += cave.rate(to);
            next.minute += 1;
            next.released += next.rate;
        }
        next
    }

    /// Total released by the horizon if nothing more gets opened.
    fn projected(&self, horizon: u32) -> u32 {
        self.released + self.rate * (horizon - self.minute)
    }

    /// Upper bound on the achievable total: pretend every still-closed active
    /// valve can be reached and opened in 2 minutes flat, best rates first.
    /// Deliberately ignores real tunnel distances; it only has to be an
    /// over-approximation.
    fn optimistic_bound(&self, cave: &Cave, horizon: u32) -> u32 {
        let mut closed: Vec<u32> = cave
            .active()
            .filter(|v| !self.open.contains(v))
            .map(|v| cave.rate(v))
            .collect();
        closed.sort_unstable_by(|a, b| b.cmp(a));
        let minutes_left = horizon - self.minute;
        let openable = (minutes_left / 2) as usize;
        let extra: u32 = closed
            .iter()
            .take(openable)
            .enumerate()
            .map(|(i, rate)| rate * (minutes_left - 2 * i as u32))
            .sum();
        self.projected(horizon) + extra
    }

    /// Candidate successors: per tunnel, move-and-open (when the destination
    /// has flow and is still closed) and plain move. Opening costs the extra
    /// minute, so it needs two left on the clock.
    fn expand(&self, cave: &Cave, horizon: u32) -> Vec<PathState> {
        let mut out = Vec::new();
        if self.minute >= horizon {
            return out;
        }
        for &next in cave.neighbors(self.at) {
            if cave.rate(next) > 0 && !self.open.contains(&next) && self.minute + 1 < horizon {
                out.push(self.step(cave, next, true));
            }
            out.push(self.step(cave, next, false));
        }
        out
    }

    #[cfg(test)]
    fn path_names<'a>(&self, cave: &'a Cave) -> Vec<&'a str> {
        self.path.iter().map(|&v| cave.name(v)).collect()
    }
}

/// Non-backtracking pass: per valve, keep only the best-projected path seen so
/// far and expand one frontier per round. Fast, not optimal; its result is a
/// valid lower bound for the full search.
fn greedy_frontier(cave: &Cave, horizon: u32) -> Result<PathState, SolveError> {
    let start = cave.id("AA").ok_or(SolveError::SearchExhausted)?;
    let mut best = PathState::start(start);
    let mut best_score = best.projected(horizon);
    let mut best_per_valve: HashMap<ValveId, u32> = HashMap::new();
    best_per_valve.insert(start, best_score);

    let mut frontier = vec![best.clone()];
    let mut expanded_any = false;
    for _round in 0..horizon {
        let mut next_frontier = Vec::new();
        for state in &frontier {
            for candidate in state.expand(cave, horizon) {
                expanded_any = true;
                let score = candidate.projected(horizon);
                let known = best_per_valve.entry(candidate.at).or_insert(0);
                if score <= *known {
                    continue;
                }
                *known = score;
                if score > best_score {
                    best_score = score;
                    best = candidate.clone();
                }
                next_frontier.push(candidate);
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }
    if !expanded_any {
        return Err(SolveError::SearchExhausted);
    }
    Ok(best)
}

/// Branch and bound over rounds of the frontier: a candidate survives only if
/// its optimistic bound beats the best projected total found so far. The
/// greedy pass seeds the bound so early rounds already prune. The round count
/// is capped at the horizon; minutes only move forward.
fn best_path(cave: &Cave, horizon: u32) -> Result<PathState, SolveError> {
    let mut best = greedy_frontier(cave, horizon)?;
    let mut best_score = best.projected(horizon);

    let start = cave.id("AA").ok_or(SolveError::SearchExhausted)?;
    let mut frontier = vec![PathState::start(start)];
    let mut nstates: usize = 0;
    for _round in 0..horizon {
        let mut next_frontier = Vec::new();
        for state in &frontier {
            for candidate in state.expand(cave, horizon) {
                nstates += 1;
                if candidate.optimistic_bound(cave, horizon) <= best_score {
                    continue;
                }
                let score = candidate.projected(horizon);
                if score > best_score {
                    best_score = score;
                    best = candidate.clone();
                }
                next_frontier.push(candidate);
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }
    eprintln!("nstates={nstates} best={best_score}");
    Ok(best)
}

fn part1(r: impl Read) -> Result<u32, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    let cave = Cave::from_str(&input)?;
    let best = best_path(&cave, HORIZON)?;
    Ok(best.projected(HORIZON))
}

// Reports the greedy pass over the same horizon as a quick lower bound.
fn part2(r: impl Read) -> Result<u32, Box<dyn Error>> {
    let input = std::io::read_to_string(r)?;
    let cave = Cave::from_str(&input)?;
    let best = greedy_frontier(&cave, HORIZON)?;
    Ok(best.projected(HORIZON))
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

#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";

    const ONE_VALVE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD
Valve DD has flow rate=20; tunnels lead to valves AA";

    const LINEAR: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD
Valve DD has flow rate=1; tunnels lead to valves AA, EE
Valve EE has flow rate=2; tunnels lead to valves DD";

    const OPEN_LATER: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD
Valve DD has flow rate=1; tunnels lead to valves AA, EE
Valve EE has flow rate=20; tunnels lead to valves DD";

    // Walk a ;-separated script like "DD*;CC;BB*", where * opens the valve.
    fn walk(cave: &Cave, script: &str) -> PathState {
        let mut state = PathState::start(cave.id("AA").unwrap());
        for step in script.split(';') {
            let open_it = step.ends_with('*');
            let name = step.trim_end_matches('*');
            state = state.step(cave, cave.id(name).unwrap(), open_it);
        }
        state
    }

    #[test]
    fn test_parse() {
        let cave: Cave = EXAMPLE.parse().unwrap();
        assert_eq!(cave.names.len(), 10);
        assert_eq!(cave.rate(cave.id("BB").unwrap()), 13);
        assert_eq!(cave.rate(cave.id("HH").unwrap()), 22);
        let jj = cave.id("JJ").unwrap();
        assert_eq!(cave.neighbors(jj), &[cave.id("II").unwrap()]);
        let mut active: Vec<&str> = cave.active().map(|v| cave.name(v)).collect();
        active.sort_unstable();
        assert_eq!(active, vec!["BB", "CC", "DD", "EE", "HH", "JJ"]);
    }

    #[test]
    fn test_parse_rejects_malformed_line() {
        let got = Cave::from_str("Valve AA has flow rate=; tunnels lead to valves BB");
        assert_eq!(
            got.err(),
            Some(SolveError::Parse {
                line: "Valve AA has flow rate=; tunnels lead to valves BB".to_string()
            })
        );
    }

    #[test]
    fn test_step_accounting() {
        let cave: Cave = EXAMPLE.parse().unwrap();
        let state = walk(&cave, "DD*");
        assert_eq!((state.minute, state.rate, state.released), (3, 20, 20));
        let state = walk(&cave, "DD*;CC;BB*");
        assert_eq!((state.minute, state.rate), (6, 33));
        assert_eq!(state.path_names(&cave), vec!["AA", "DD", "CC", "BB"]);
    }

    #[test]
    fn test_released_monotonic_and_opens_unique() {
        let cave: Cave = EXAMPLE.parse().unwrap();
        let mut last_released = 0;
        let mut state2 = PathState::start(cave.id("AA").unwrap());
        for step in "DD*;CC;BB*;AA;II;JJ*;II;AA;DD".split(';') {
            let open_it = step.ends_with('*');
            let name = step.trim_end_matches('*');
            state2 = state2.step(&cave, cave.id(name).unwrap(), open_it);
            assert!(state2.released >= last_released, "released decreased at {step}");
            last_released = state2.released;
            // An already-open valve must never show up as an open-candidate,
            // no matter how often the path revisits it.
            for cand in state2.expand(&cave, HORIZON) {
                assert!(cand.open.len() <= state2.open.len() + 1);
                assert!(cand.open.is_superset(&state2.open));
                if cand.open.len() > state2.open.len() {
                    assert!(!state2.open.contains(&cand.at));
                }
            }
        }
        assert_eq!(state2.open.len(), 3);
    }

    #[test]
    fn test_optimistic_bound_values() {
        let one: Cave = ONE_VALVE.parse().unwrap();
        assert_eq!(PathState::start(one.id("AA").unwrap()).optimistic_bound(&one, 30), 580);
        assert_eq!(walk(&one, "DD*").optimistic_bound(&one, 30), 560);

        let linear: Cave = LINEAR.parse().unwrap();
        assert_eq!(PathState::start(linear.id("AA").unwrap()).optimistic_bound(&linear, 30), 85);
        assert_eq!(walk(&linear, "DD*").optimistic_bound(&linear, 30), 82);

        let later: Cave = OPEN_LATER.parse().unwrap();
        assert_eq!(PathState::start(later.id("AA").unwrap()).optimistic_bound(&later, 30), 607);
        assert_eq!(walk(&later, "DD").optimistic_bound(&later, 30), 586);
        assert_eq!(walk(&later, "DD*").optimistic_bound(&later, 30), 568);
        assert_eq!(walk(&later, "DD;EE*").optimistic_bound(&later, 30), 566);
    }

    #[test]
    fn test_bound_is_sound_along_optimal_path() {
        // The bound at every prefix of a known-optimal path must cover the
        // total that path eventually realizes.
        let cave: Cave = EXAMPLE.parse().unwrap();
        let script = "DD*;CC;BB*;AA;II;JJ*;II;AA;DD;EE;FF;GG;HH*;GG;FF;EE*;DD;CC*";
        let final_total = walk(&cave, script).projected(30);
        assert_eq!(final_total, 1651);
        let mut state = PathState::start(cave.id("AA").unwrap());
        assert!(state.optimistic_bound(&cave, 30) >= final_total);
        for step in script.split(';') {
            let open_it = step.ends_with('*');
            state = state.step(&cave, cave.id(step.trim_end_matches('*')).unwrap(), open_it);
            assert!(
                state.optimistic_bound(&cave, 30) >= final_total,
                "bound fell below the realized total at {step}"
            );
        }
    }

    #[test]
    fn test_single_reachable_valve() {
        // horizon - distance - 1 minutes of flow.
        let cave: Cave = ONE_VALVE.parse().unwrap();
        let best = best_path(&cave, 30).unwrap();
        assert_eq!(best.projected(30), (30 - 1 - 1) * 20);
        assert_eq!(best.path_names(&cave), vec!["AA", "DD"]);
    }

    #[test]
    fn test_linear_cave() {
        let cave: Cave = LINEAR.parse().unwrap();
        let best = best_path(&cave, 30).unwrap();
        assert_eq!(best.projected(30), 80);
        assert_eq!(best.path_names(&cave), vec!["AA", "DD", "EE"]);
    }

    #[test]
    fn test_delaying_an_open_beats_greedy() {
        let cave: Cave = OPEN_LATER.parse().unwrap();
        let greedy = greedy_frontier(&cave, 30).unwrap();
        assert_eq!(greedy.projected(30), 548);
        assert_eq!(greedy.path_names(&cave), vec!["AA", "DD", "EE"]);
        let best = best_path(&cave, 30).unwrap();
        assert_eq!(best.projected(30), 565);
        assert_eq!(best.path_names(&cave), vec!["AA", "DD", "EE", "DD"]);
    }

    #[test]
    fn test_search_exhausted() {
        let cave: Cave = "Valve AA has flow rate=0; tunnels lead to valves AA".parse().unwrap();
        // A start valve with no real tunnels never yields a candidate.
        let cave = Cave {
            tunnels: vec![Vec::new()],
            ..cave
        };
        assert!(matches!(best_path(&cave, 30), Err(SolveError::SearchExhausted)));
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE.as_bytes()).unwrap(), 1651);
    }

    #[test]
    fn test_part2_greedy_falls_short() {
        assert_eq!(part2(EXAMPLE.as_bytes()).unwrap(), 1647);
    }
}
