//! Scripted headless walkthrough.
//!
//! Feeds a timed sequence of key and pointer events through the real input
//! stack, so the demo exercises exactly the path a windowed build would:
//! raw events -> [`InputState`] -> [`PlayerIntent`] -> simulation tick.

use windfall_input::{InputState, PlayerIntent, RawKeyEvent, sample_intent};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// One scripted input action.
#[derive(Debug, Clone, Copy)]
enum ScriptEvent {
    /// Capture the pointer (enables look deltas).
    Capture,
    /// Press a key.
    Press(KeyCode),
    /// Release a key.
    Release(KeyCode),
    /// Sweep the pointer by (dx, dy) pixels.
    Look(f32, f32),
}

/// The walkthrough: step up to the table, pull the lever twice, collect the
/// winnings, then glance around.
const SCRIPT: &[(f32, ScriptEvent)] = &[
    (0.0, ScriptEvent::Capture),
    (0.05, ScriptEvent::Press(KeyCode::KeyW)),
    (0.6, ScriptEvent::Release(KeyCode::KeyW)),
    (0.8, ScriptEvent::Press(KeyCode::KeyF)),
    (0.85, ScriptEvent::Release(KeyCode::KeyF)),
    (1.6, ScriptEvent::Press(KeyCode::KeyF)),
    (1.65, ScriptEvent::Release(KeyCode::KeyF)),
    (2.4, ScriptEvent::Press(KeyCode::KeyC)),
    (2.45, ScriptEvent::Release(KeyCode::KeyC)),
    (2.8, ScriptEvent::Look(400.0, -60.0)),
    (3.2, ScriptEvent::Look(-400.0, 60.0)),
];

/// Replays [`SCRIPT`] against an [`InputState`], yielding one intent per tick.
pub struct DemoScript {
    input: InputState,
    cursor: usize,
    elapsed: f32,
}

impl DemoScript {
    /// Creates a script positioned at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            cursor: 0,
            elapsed: 0.0,
        }
    }

    /// Advances script time by `dt`, applies any due events, and samples the
    /// tick's intent.
    pub fn advance(&mut self, dt: f32) -> PlayerIntent {
        self.elapsed += dt;
        while let Some((time, event)) = SCRIPT.get(self.cursor) {
            if *time > self.elapsed {
                break;
            }
            self.apply(*event);
            self.cursor += 1;
        }
        let intent = sample_intent(&self.input);
        self.input.clear_transients();
        intent
    }

    /// Whether every scripted event has been delivered.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.cursor >= SCRIPT.len()
    }

    fn apply(&mut self, event: ScriptEvent) {
        match event {
            ScriptEvent::Capture => self.input.set_captured(true),
            ScriptEvent::Press(code) => self.input.process_raw(RawKeyEvent {
                key: PhysicalKey::Code(code),
                state: ElementState::Pressed,
                repeat: false,
            }),
            ScriptEvent::Release(code) => self.input.process_raw(RawKeyEvent {
                key: PhysicalKey::Code(code),
                state: ElementState::Released,
                repeat: false,
            }),
            ScriptEvent::Look(dx, dy) => self.input.on_raw_motion(f64::from(dx), f64::from(dy)),
        }
    }
}

impl Default for DemoScript {
    fn default() -> Self {
        Self::new()
    }
}
