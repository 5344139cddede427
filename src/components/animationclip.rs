//! Groups of tweens played together.
//!
//! An [`AnimationClip`] registers its tweens paused in a [`Ticker`] and then
//! starts, pauses and resumes them as one unit.

use std::cell::RefCell;
use std::rc::Rc;

use super::tween::Tween;
use crate::resources::ticker::{Tickable, Ticker};

#[derive(Debug, Default)]
pub struct AnimationClip {
    tweens: Vec<Rc<RefCell<Tween>>>,
}

impl AnimationClip {
    /// Pause every tween and register it with `ticker`.
    pub fn new(ticker: &mut Ticker, tweens: impl IntoIterator<Item = Tween>) -> Self {
        let tweens = tweens
            .into_iter()
            .map(|mut tween| {
                tween.pause();
                ticker.spawn(tween)
            })
            .collect();
        AnimationClip { tweens }
    }

    pub fn tweens(&self) -> &[Rc<RefCell<Tween>>] {
        &self.tweens
    }

    /// Rewind and run every tween.
    ///
    /// Tweens that already completed were dropped by the ticker, so they are
    /// registered again.
    pub fn start(&self, ticker: &mut Ticker) {
        for tween in &self.tweens {
            let was_complete = tween.borrow().is_complete();
            tween.borrow_mut().start();
            if was_complete {
                ticker.add(tween.clone());
            }
        }
    }

    pub fn pause(&self) {
        for tween in &self.tweens {
            tween.borrow_mut().pause();
        }
    }

    pub fn resume(&self) {
        for tween in &self.tweens {
            tween.borrow_mut().resume();
        }
    }

    /// True once every tween in the clip completed.
    pub fn is_complete(&self) -> bool {
        self.tweens.iter().all(|t| t.borrow().is_complete())
    }
}
