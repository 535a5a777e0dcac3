use crate::feedback::CopyTicket;
use swatch_color::Notation;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Picker widget          → `Picker`, then `ColorPicked`
/// - Info item copy buttons → `CopyRequested`
/// - Clipboard task         → `CopyFinished`
/// - Feedback timer task    → `CopyFeedbackExpired`
/// - Config watcher task    → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Picker ────────────────────────────────────────────────────────────────
    /// Raw slider / text input from the picker widget.
    Picker(PickerInput),
    /// The picker produced a new normalized hex string (`#rrggbb[aa]`).
    ColorPicked(String),

    // ── Clipboard ─────────────────────────────────────────────────────────────
    /// User pressed the copy button next to a notation.
    CopyRequested(Notation),
    /// The clipboard write finished.  `copied == false` is ignored.
    CopyFinished { notation: Notation, copied: bool },
    /// The "Copied!" acknowledgment for `ticket` has run its course.
    CopyFeedbackExpired(CopyTicket),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
}

/// Gestures on the picker controls.
#[derive(Debug, Clone)]
pub enum PickerInput {
    /// Hue slider, degrees `0..=360`.
    Hue(f32),
    /// Saturation slider, `0..=1`.
    Saturation(f32),
    /// Lightness slider, `0..=1`.
    Lightness(f32),
    /// Alpha slider, `0..=1`.
    Alpha(f32),
    /// Hex text field edited (may be partial / invalid mid-typing).
    HexEdited(String),
}
