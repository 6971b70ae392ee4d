//! Role typewriter: reveals each role one character at a time, holds it,
//! erases it and moves on to the next.
//!
//! [`Typewriter`] is a plain state machine. Each call to
//! [`Typewriter::step`] performs one transition and returns how long to wait
//! before the next call. The async drivers below schedule those calls; the
//! caller owns the task and cancels it on teardown.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::trace;

use crate::error::FolioError;

/// Where the typewriter is within the current role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Erasing,
    Advancing,
}

/// Step delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay between typed characters.
    #[serde(with = "crate::config::millis")]
    pub type_interval: Duration,
    /// Dwell on the fully typed role.
    #[serde(with = "crate::config::millis")]
    pub hold: Duration,
    /// Delay between erased characters.
    #[serde(with = "crate::config::millis")]
    pub erase_interval: Duration,
    /// Pause before typing the next role.
    #[serde(with = "crate::config::millis")]
    pub pause: Duration,
    /// Cursor blink period.
    #[serde(with = "crate::config::millis")]
    pub blink_interval: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(180),
            hold: Duration::from_millis(1300),
            erase_interval: Duration::from_millis(90),
            pause: Duration::from_millis(300),
            blink_interval: Duration::from_millis(600),
        }
    }
}

/// Snapshot handed to renderers after every step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub role_index: usize,
    pub phase: Phase,
}

/// Typing/holding/erasing/advancing state machine over a fixed role list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    index: usize,
    len: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Fails on an empty list or a blank role.
    pub fn new<S: AsRef<str>>(roles: &[S], timing: TypewriterTiming) -> Result<Self, FolioError> {
        if roles.is_empty() {
            return Err(FolioError::EmptyRoleList);
        }
        if let Some(index) = roles.iter().position(|r| r.as_ref().trim().is_empty()) {
            return Err(FolioError::BlankRole { index });
        }

        Ok(Self {
            roles: roles.iter().map(|r| r.as_ref().chars().collect()).collect(),
            index: 0,
            len: 0,
            phase: Phase::Typing,
            timing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Number of visible characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn timing(&self) -> &TypewriterTiming {
        &self.timing
    }

    pub fn current_role(&self) -> String {
        self.roles[self.index].iter().collect()
    }

    fn role_len(&self) -> usize {
        self.roles[self.index].len()
    }

    pub fn visible_text(&self) -> String {
        self.roles[self.index][..self.len].iter().collect()
    }

    pub fn frame(&self) -> TypewriterFrame {
        TypewriterFrame {
            text: self.visible_text(),
            role_index: self.index,
            phase: self.phase,
        }
    }

    /// Runs one transition and returns the delay before the next one.
    pub fn step(&mut self) -> Duration {
        let delay = match self.phase {
            Phase::Typing => {
                self.len = (self.len + 1).min(self.role_len());
                if self.len == self.role_len() {
                    self.phase = Phase::Holding;
                    self.timing.hold
                } else {
                    self.timing.type_interval
                }
            }
            Phase::Holding => {
                self.phase = Phase::Erasing;
                self.timing.erase_interval
            }
            Phase::Erasing => {
                self.len = self.len.saturating_sub(1);
                if self.len == 0 {
                    self.phase = Phase::Advancing;
                }
                self.timing.erase_interval
            }
            Phase::Advancing => {
                self.index = (self.index + 1) % self.roles.len();
                self.phase = Phase::Typing;
                self.timing.pause
            }
        };
        trace!(index = self.index, len = self.len, phase = ?self.phase, "Typewriter step");
        delay
    }
}

/// Cursor visibility, flipped on a fixed period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Character drawn after the typed text.
    pub fn glyph(&self) -> &'static str {
        if self.visible { "|" } else { "\u{00A0}" }
    }
}

/// Drives `machine` forever, reporting a frame after every step.
///
/// Each step is scheduled only after the previous one has run. The future
/// never completes; drop or cancel its task to stop it.
pub async fn run_typewriter<F>(mut machine: Typewriter, mut on_frame: F)
where
    F: FnMut(TypewriterFrame),
{
    on_frame(machine.frame());
    loop {
        let delay = machine.step();
        on_frame(machine.frame());
        sleep(delay).await;
    }
}

/// Flips `cursor` every `interval`, reporting the new state.
pub async fn run_cursor_blink<F>(interval: Duration, mut cursor: CursorBlink, mut on_toggle: F)
where
    F: FnMut(CursorBlink),
{
    loop {
        sleep(interval).await;
        cursor.toggle();
        on_toggle(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 3] = ["Frontend Developer", "Java Developer", "Problem Solver"];

    fn machine(roles: &[&str]) -> Typewriter {
        Typewriter::new(roles, TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_blank_roles() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Typewriter::new(&empty, TypewriterTiming::default()),
            Err(FolioError::EmptyRoleList)
        ));
        assert!(matches!(
            Typewriter::new(&["ok", "  "], TypewriterTiming::default()),
            Err(FolioError::BlankRole { index: 1 })
        ));
    }

    #[test]
    fn test_full_cycle_for_every_role() {
        let timing = TypewriterTiming::default();
        let mut tw = machine(&ROLES);

        for (i, role) in ROLES.iter().enumerate() {
            assert_eq!(tw.role_index(), i);
            assert_eq!(tw.phase(), Phase::Typing);
            assert_eq!(tw.len(), 0);

            let n = role.chars().count();
            for expected in 1..=n {
                let delay = tw.step();
                assert_eq!(tw.len(), expected);
                if expected < n {
                    assert_eq!(delay, timing.type_interval);
                    assert_eq!(tw.phase(), Phase::Typing);
                } else {
                    assert_eq!(delay, timing.hold);
                    assert_eq!(tw.phase(), Phase::Holding);
                }
            }
            assert_eq!(tw.visible_text(), *role);

            assert_eq!(tw.step(), timing.erase_interval);
            assert_eq!(tw.phase(), Phase::Erasing);
            assert_eq!(tw.len(), n);

            for expected in (0..n).rev() {
                assert_eq!(tw.step(), timing.erase_interval);
                assert_eq!(tw.len(), expected);
            }
            assert_eq!(tw.phase(), Phase::Advancing);
            assert_eq!(tw.role_index(), i);

            assert_eq!(tw.step(), timing.pause);
            assert_eq!(tw.role_index(), (i + 1) % ROLES.len());
        }
        assert_eq!(tw.role_index(), 0);
    }

    #[test]
    fn test_length_stays_within_role_bounds() {
        let mut tw = machine(&ROLES);
        for _ in 0..500 {
            tw.step();
            assert!(tw.len() <= tw.current_role().chars().count());
        }
    }

    #[test]
    fn test_single_role_cycles_on_itself() {
        let mut tw = machine(&["Go"]);
        let mut phases = Vec::new();
        for _ in 0..12 {
            tw.step();
            phases.push(tw.phase());
            assert_eq!(tw.role_index(), 0);
        }
        // G, Go(hold), erase, o, "", advance -> typing again
        assert_eq!(
            &phases[..6],
            &[
                Phase::Typing,
                Phase::Holding,
                Phase::Erasing,
                Phase::Erasing,
                Phase::Advancing,
                Phase::Typing,
            ]
        );
        assert_eq!(&phases[..6], &phases[6..]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut tw = machine(&["café"]);
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.visible_text(), "café");
        assert_eq!(tw.len(), 4);
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn test_cursor_blink_toggles() {
        let mut cursor = CursorBlink::new();
        assert!(cursor.visible());
        assert_eq!(cursor.glyph(), "|");
        assert!(!cursor.toggle());
        assert!(cursor.toggle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_reports_before_first_sleep() {
        let mut texts = Vec::new();
        {
            let mut driver = tokio_test::task::spawn(run_typewriter(machine(&["Hi"]), |frame| {
                texts.push(frame.text);
            }));
            tokio_test::assert_pending!(driver.poll());
        }
        assert_eq!(texts, vec![String::new(), "H".to_string()]);
    }

    #[test]
    fn test_timing_from_toml_uses_millis() {
        let timing: TypewriterTiming = toml::from_str("type_interval = 50\nhold = 1000").unwrap();
        assert_eq!(timing.type_interval, Duration::from_millis(50));
        assert_eq!(timing.hold, Duration::from_millis(1000));
        assert_eq!(timing.erase_interval, TypewriterTiming::default().erase_interval);
    }
}
