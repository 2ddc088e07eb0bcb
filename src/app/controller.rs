//! Applies confirmed input edges to the vehicle state.
//!
//! | Signal          | Rising edge                     | Falling edge           |
//! |-----------------|---------------------------------|------------------------|
//! | Accelerator     | apply                           | release                |
//! | Brake           | apply                           | release                |
//! | Horn            | lamp on, `AudioSink::play`      | lamp off, `stop`       |
//! | Left indicator  | toggle; on forces right off     | ignored                |
//! | Right indicator | toggle; on forces left off      | ignored                |
//!
//! The indicators behave like a single-button toggle switch: only the press
//! flips them, releasing the button changes nothing.

use log::{debug, info};

use crate::app::cockpit::{Cockpit, CockpitHandle};
use crate::app::ports::{AudioSink, DisplaySink};
use crate::app::signal::{ConfirmedEdge, Signal};

pub struct StateController<D, A> {
    cockpit: CockpitHandle<D, A>,
}

impl<D: DisplaySink, A: AudioSink> StateController<D, A> {
    pub fn new(cockpit: CockpitHandle<D, A>) -> Self {
        Self { cockpit }
    }

    /// Apply one edge and, if the state changed, push the full snapshot to
    /// the display before releasing the lock.
    pub fn apply(&self, edge: ConfirmedEdge) {
        let mut guard = self.cockpit.lock();
        let Cockpit {
            state,
            display,
            audio,
        } = &mut *guard;
        let pressed = edge.level.is_high();

        match edge.signal {
            Signal::Accelerator => {
                info!("Accelerator {}", if pressed { "pressed" } else { "released" });
                state.set_accelerator(pressed);
            }
            Signal::Brake => {
                info!("Brake {}", if pressed { "pressed" } else { "released" });
                state.set_brake(pressed);
            }
            Signal::Horn => {
                state.set_horn(pressed);
                if pressed {
                    info!("Horn pressed");
                    audio.play();
                } else {
                    info!("Horn released");
                    audio.stop();
                }
            }
            Signal::LeftIndicator | Signal::RightIndicator if !pressed => {
                debug!("{} released (no change)", edge.signal);
                return;
            }
            Signal::LeftIndicator => {
                info!("Left indicator pressed");
                let on = state.toggle_left_indicator();
                debug!("left={} right={}", on, state.right_indicator_on());
            }
            Signal::RightIndicator => {
                info!("Right indicator pressed");
                let on = state.toggle_right_indicator();
                debug!("left={} right={}", state.left_indicator_on(), on);
            }
        }

        display.show(state);
    }

    /// Apply a batch of edges in iteration order.
    pub fn apply_all(&self, edges: impl IntoIterator<Item = ConfirmedEdge>) {
        for edge in edges {
            self.apply(edge);
        }
    }

    pub fn cockpit(&self) -> &CockpitHandle<D, A> {
        &self.cockpit
    }
}
