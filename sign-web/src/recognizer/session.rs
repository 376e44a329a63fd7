//! Recognition session
//!
//! Ties the dispatcher, the slide allow-list and the output debouncer
//! together, and tracks the pipeline lifecycle the page drives: current
//! slide, running flag and the frame-in-flight guard.

use crate::config::GestureConfig;
use crate::gestures::label_of;
use crate::hand::DetectedFrame;
use super::allow_list::{filter_for_slide, slide_uses_camera};
use super::debounce::OutputDebouncer;
use super::dispatcher::Recognizer;

pub struct Session {
    recognizer: Recognizer,
    debouncer: OutputDebouncer,
    slide: Option<String>,
    running: bool,
    in_flight: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_config(GestureConfig::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            debouncer: OutputDebouncer::new(config.hold_ms),
            recognizer: Recognizer::new(config),
            slide: None,
            running: false,
            in_flight: false,
        }
    }

    /// Swap in a new configuration. Slide and running state are kept, all
    /// gesture state starts over.
    pub fn reconfigure(&mut self, config: GestureConfig) {
        log::info!("Gesture configuration replaced");
        self.debouncer = OutputDebouncer::new(config.hold_ms);
        self.recognizer = Recognizer::new(config);
    }

    /// Set the current slide; returns whether it wants the camera. Moving to
    /// another slide drops all gesture state.
    pub fn set_slide(&mut self, slide: &str) -> bool {
        let uses_camera = slide_uses_camera(slide);
        log::info!("Slide {} (camera: {})", slide, uses_camera);
        if self.slide.as_deref() != Some(slide) {
            self.recognizer.reset();
            self.slide = Some(slide.to_string());
        }
        self.debouncer.reset();
        uses_camera
    }

    pub fn slide(&self) -> Option<&str> {
        self.slide.as_deref()
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("Recognition started");
        }
        self.running = true;
    }

    /// Stop and forget every history, gesture state and the shown word
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Recognition stopped");
        }
        self.running = false;
        self.in_flight = false;
        self.recognizer.reset();
        self.debouncer.reset();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Claim the frame slot. False while stopped or while a frame is still
    /// being processed; the caller drops the frame.
    pub fn try_begin_frame(&mut self) -> bool {
        if !self.running || self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn end_frame(&mut self) {
        self.in_flight = false;
    }

    /// Recognize one frame and return the label to display
    pub fn on_frame(&mut self, frame: &DetectedFrame, now_ms: f64) -> &'static str {
        let slide = match (&self.slide, self.running) {
            (Some(slide), true) => slide,
            _ => return self.current_label(),
        };

        let candidate = self.recognizer.process(frame, now_ms);
        let allowed = filter_for_slide(slide, candidate);
        if candidate.is_some() && allowed.is_none() {
            log::debug!("{:?} not taught on {}", candidate, slide);
        }

        label_of(self.debouncer.offer(allowed, now_ms))
    }

    pub fn current_label(&self) -> &'static str {
        label_of(self.debouncer.shown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::{Word, NOTHING_RECOGNIZED};
    use crate::test_support::{how_are_you_pose, self_pose, translated};

    fn self_frame() -> DetectedFrame {
        DetectedFrame { left: Some(self_pose()), right: None }
    }

    /// Right hand in the "how are you" pose, drawn outward one step per frame
    fn drawn_outward(step: usize) -> DetectedFrame {
        let hand = translated(&how_are_you_pose(), 0.03 * step as f32, 0.0);
        DetectedFrame { left: None, right: Some(hand) }
    }

    fn running_on(slide: &str) -> Session {
        let mut session = Session::new();
        session.set_slide(slide);
        session.start();
        session
    }

    #[test]
    fn test_set_slide_reports_camera() {
        let mut session = Session::new();
        assert!(session.set_slide("page27"));
        assert!(!session.set_slide("page1"));
        assert_eq!(session.slide(), Some("page1"));
    }

    #[test]
    fn test_slide_change_forgets_motion() {
        let how_are_you = label_of(Some(Word::HowAreYou));

        let mut session = running_on("page12");
        for step in 0..5 {
            session.on_frame(&drawn_outward(step), step as f64 * 33.0);
        }
        session.set_slide("page14");
        assert_eq!(session.on_frame(&drawn_outward(5), 165.0), NOTHING_RECOGNIZED);

        let mut session = running_on("page12");
        for step in 0..5 {
            session.on_frame(&drawn_outward(step), step as f64 * 33.0);
        }
        session.set_slide("page12");
        assert_eq!(session.on_frame(&drawn_outward(5), 165.0), how_are_you);
    }

    #[test]
    fn test_stopped_session_ignores_frames() {
        let mut session = Session::new();
        session.set_slide("page27");
        assert_eq!(session.on_frame(&self_frame(), 0.0), NOTHING_RECOGNIZED);
    }

    #[test]
    fn test_no_slide_ignores_frames() {
        let mut session = Session::new();
        session.start();
        assert_eq!(session.on_frame(&self_frame(), 0.0), NOTHING_RECOGNIZED);
    }

    #[test]
    fn test_allow_list_filters_words() {
        let mut session = running_on("page27");
        assert_eq!(session.on_frame(&self_frame(), 0.0), "Ich");

        let mut session = running_on("page8");
        assert_eq!(session.on_frame(&self_frame(), 0.0), NOTHING_RECOGNIZED);
    }

    #[test]
    fn test_word_held_after_hands_leave() {
        let mut session = running_on("page27");
        session.on_frame(&self_frame(), 0.0);

        let empty = DetectedFrame::default();
        assert_eq!(session.on_frame(&empty, 500.0), "Ich");
        assert_eq!(session.current_label(), "Ich");
        assert_eq!(session.on_frame(&empty, 1100.0), NOTHING_RECOGNIZED);
    }

    #[test]
    fn test_frame_guard() {
        let mut session = Session::new();
        assert!(!session.try_begin_frame());

        session.start();
        assert!(session.try_begin_frame());
        assert!(!session.try_begin_frame());
        session.end_frame();
        assert!(session.try_begin_frame());
    }

    #[test]
    fn test_stop_clears_state() {
        let mut session = running_on("page27");
        session.on_frame(&self_frame(), 0.0);
        assert!(session.try_begin_frame());

        session.stop();
        assert!(!session.is_running());
        assert_eq!(session.current_label(), NOTHING_RECOGNIZED);

        session.start();
        assert!(session.try_begin_frame());
    }

    #[test]
    fn test_reconfigure_keeps_slide() {
        let mut session = running_on("page27");
        session.reconfigure(GestureConfig {
            hold_ms: 200.0,
            ..GestureConfig::default()
        });
        assert_eq!(session.slide(), Some("page27"));
        assert!(session.is_running());

        session.on_frame(&self_frame(), 0.0);
        assert_eq!(session.on_frame(&DetectedFrame::default(), 300.0), NOTHING_RECOGNIZED);
    }
}
