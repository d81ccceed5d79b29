use log::{debug, trace, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Read, Write};
use std::sync::Arc;

use swg_cli::CliConfig;
use swg_game::{Choice, Round, Score};

use crate::error::SwgError;

const PROMPT: &str = "Choose snake, water or gun (q to quit): ";
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];
const MAX_LINE_BYTES: u64 = 256;

pub fn report(score: &Score) -> String {
    format!("Final score: {}", score)
}

/// Plays rounds read line by line from `input` until quit, end of input
/// or the configured round limit.
pub struct Session<R, W> {
    input: R,
    output: W,
    rng: StdRng,
    rounds: Option<u32>,
    batch: bool,
    score: Arc<Mutex<Score>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &CliConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            input,
            output,
            rng,
            rounds: config.rounds,
            batch: config.batch,
            score: Arc::new(Mutex::new(Score::default())),
        }
    }

    /// Shared handle to the running tally
    pub fn score(&self) -> Arc<Mutex<Score>> {
        self.score.clone()
    }

    fn limit_reached(&self) -> bool {
        match self.rounds {
            Some(limit) => self.score.lock().rounds() >= limit,
            None => false,
        }
    }

    /// Reads one line, keeping at most `MAX_LINE_BYTES` of it. Bytes that
    /// are not UTF-8 are replaced so they fail to parse as a choice.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = (&mut self.input)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        if buf.last() != Some(&b'\n') {
            self.skip_rest_of_line()?;
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let (found, used) = {
                let available = self.input.fill_buf()?;
                if available.is_empty() {
                    return Ok(());
                }
                match available.iter().position(|b| *b == b'\n') {
                    Some(i) => (true, i + 1),
                    None => (false, available.len()),
                }
            };
            self.input.consume(used);
            if found {
                return Ok(());
            }
        }
    }

    pub fn run(&mut self) -> Result<Score, SwgError> {
        while !self.limit_reached() {
            if !self.batch {
                write!(self.output, "{}", PROMPT)?;
                self.output.flush()?;
            }

            let line = match self.next_line()? {
                Some(line) => line,
                None => {
                    trace!("End of input");
                    if !self.batch {
                        writeln!(self.output)?;
                    }
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if QUIT_WORDS.iter().any(|x| line.eq_ignore_ascii_case(x)) {
                trace!("Player quit");
                break;
            }

            let player = match line.parse::<Choice>() {
                Ok(choice) => choice,
                Err(e) => {
                    warn!("{}", e);
                    if self.batch {
                        return Err(e.into());
                    }
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            let round = Round::play(player, &mut self.rng);
            debug!(
                "Round {}: {} vs {} => {:?}",
                self.score.lock().rounds() + 1,
                round.player,
                round.computer,
                round.outcome
            );
            writeln!(self.output, "Computer chose {}.", round.computer)?;
            writeln!(self.output, "{}", round.describe())?;
            self.score.lock().record(&round.outcome);
        }

        let score = *self.score.lock();
        writeln!(self.output, "{}", report(&score))?;
        Ok(score)
    }
}
