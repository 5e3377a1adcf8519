use std::{borrow::Cow, fmt::Display, time::{Duration, Instant}};

/// Named timestamps of the driver phases
#[derive(Clone, Debug)]
pub struct TimeProfile {
    /// Start timestamp
    now: Instant,
    /// Named timestamps
    stamps: Vec<TimeProfileEntry>,
}

impl Default for TimeProfile {
    fn default() -> Self {
        Self {
            now: Instant::now(),
            stamps: Default::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct TimeProfileEntry {
    name: Cow<'static, str>,
    timestamp: Instant,
}

impl TimeProfile {
    /// Record a timestamp right now
    #[inline]
    pub fn stamp(&mut self, name: impl Into<Cow<'static, str>>) {
        self.stamps.push(TimeProfileEntry {
            name: name.into(),
            timestamp: Instant::now(),
        });
    }

    /// Names of the recorded stamps, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stamps.iter().map(|stamp| stamp.name.as_ref())
    }

    /// Get duration from creation to the last recorded timestamp
    pub fn total_duration(&self) -> Duration {
        match self.stamps.last() {
            Some(last) => last.timestamp - self.now,
            None => Duration::ZERO,
        }
    }
}

impl Display for TimeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max_name_length = self.stamps.iter()
            .map(|stamp| stamp.name.len())
            .max()
            .unwrap_or(0)
            .max(1);

        let mut last_time = self.now;
        for (i, stamp) in self.stamps.iter().enumerate() {
            let cumtime = stamp.timestamp - self.now;
            let parttime = stamp.timestamp - last_time;

            writeln!(f, "{:2} {:width$} {:12.6} ms {:12.6} ms",
                i,
                stamp.name,
                parttime.as_secs_f64() * 1000.,
                cumtime.as_secs_f64() * 1000.,
                width=max_name_length
            )?;

            last_time = stamp.timestamp;
        }
        Ok(())
    }
}
