//! Desktop window for `swatch`.
//!
//! Owns the Iced application loop and wires together the background work:
//! - Clipboard writes (one task per copy request)
//! - "Copied!" revert timers
//! - Config file watcher (live reload on change)

use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, row},
    Alignment, Element, Length, Size, Subscription, Task,
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use swatch_clipboard::{copy, Clipboard, SystemClipboard};
use swatch_color::Notation;
use swatch_config::{default_path, load as load_config, ConfigWatcher, SwatchConfig};
use swatch_core::{state::AppState, Message};
use swatch_theme::{Theme, ToIced};
use swatch_widgets::{ColorInfoWidget, PickerWidget, PreviewWidget};
use tracing::{debug, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the picker window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let config_path = default_path();
    let config      = load_or_default(&config_path);
    let size        = Size::new(config.window.width, config.window.height);

    let boot = move || Swatch::new(config.clone(), config_path.clone());

    iced::application(boot, Swatch::update, Swatch::view)
        .title("Swatch")
        .subscription(Swatch::subscription)
        .style(Swatch::style)
        .window_size(size)
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

pub struct Swatch {
    state:       AppState,
    config:      SwatchConfig,
    config_path: PathBuf,
    theme:       Theme,
    picker:      PickerWidget,
    info:        ColorInfoWidget,
    preview:     PreviewWidget,
    clipboard:   Arc<dyn Clipboard>,
}

impl Swatch {
    fn new(config: SwatchConfig, config_path: PathBuf) -> (Self, Task<Message>) {
        let app = Self::with_config(config, config_path, Arc::new(SystemClipboard::new()));
        (app, Task::none())
    }

    /// Build the window state from an already loaded config.
    pub fn with_config(
        config: SwatchConfig,
        config_path: PathBuf,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let variant = config.picker.variant;
        info!(
            "Starting with {} ({variant:?} variant)",
            variant.picker_hex(config.initial_color())
        );

        Self {
            state:   AppState::new(config.initial_color(), variant),
            theme:   Theme::from_config(&config.theme),
            picker:  PickerWidget::new(&config.picker.initial, variant),
            info:    ColorInfoWidget::new(config.notations(), config.render_options()),
            preview: PreviewWidget::default(),
            config,
            config_path,
            clipboard,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ── Update ────────────────────────────────────────────────────────────────

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(input) => {
                if let Some(hex) = self.picker.update(input) {
                    return self.update(Message::ColorPicked(hex));
                }
            }
            Message::ColorPicked(hex) => {
                if let Err(e) = self.state.select_hex(&hex) {
                    warn!("Ignoring picker value '{hex}': {e}");
                }
            }
            Message::CopyRequested(notation) => {
                let text      = self.state.render(notation, self.info.options());
                let clipboard = Arc::clone(&self.clipboard);
                debug!("Copying {} = {text}", notation.label());
                return Task::perform(copy(clipboard, text), move |res| {
                    copy_finished(notation, &res)
                });
            }
            // Failed writes get no acknowledgment.
            Message::CopyFinished { copied: false, .. } => {}
            Message::CopyFinished { notation, copied: true } => {
                let ticket = self.state.copy.acknowledge(notation);
                let delay  = Duration::from_millis(self.config.feedback.copied_ms);
                return Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |_| Message::CopyFeedbackExpired(ticket),
                );
            }
            Message::CopyFeedbackExpired(ticket) => {
                self.state.copy.revert(ticket);
            }
            Message::ConfigReloaded => match load_config(&self.config_path) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    self.apply_config(cfg);
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    /// Swap in a new config, keeping the selected color.
    fn apply_config(&mut self, cfg: SwatchConfig) {
        self.theme = Theme::from_config(&cfg.theme);
        self.info.configure(cfg.notations(), cfg.render_options());
        if cfg.picker.variant != self.state.variant {
            self.state.set_variant(cfg.picker.variant);
            self.picker.set_variant(cfg.picker.variant);
        }
        self.config = cfg;
    }

    // ── View ──────────────────────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        let gap   = self.theme.gap as f32;
        let pad   = self.theme.padding;
        let panel = self.theme.panel_style();

        let top = row![
            self.preview.view(&self.state, &self.theme),
            self.picker.view(&self.state, &self.theme),
        ]
        .spacing(gap * 1.5)
        .align_y(Alignment::Center);

        let body = column![
            container(top)
                .padding(pad)
                .width(Length::Fill)
                .style(move |_: &iced::Theme| panel.container()),
            container(self.info.view(&self.state, &self.theme))
                .padding(pad)
                .width(Length::Fill)
                .style(move |_: &iced::Theme| panel.container()),
        ]
        .spacing(gap);

        container(body)
            .padding(pad)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(config_stream)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color:       self.theme.foreground.to_iced(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Load the config at `path`, falling back to defaults when it can't be read.
fn load_or_default(path: &Path) -> SwatchConfig {
    match load_config(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Cannot load '{}': {e}; using default config", path.display());
            SwatchConfig::default()
        }
    }
}

/// Outcome message of a clipboard write.  The error itself is dropped.
fn copy_finished(notation: Notation, result: &swatch_core::Result<()>) -> Message {
    Message::CopyFinished { notation, copied: result.is_ok() }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `swatch.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use swatch_color::{Color, Variant};
    use swatch_core::{PickerInput, Result, SwatchError};

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl Clipboard for Recording {
        fn write_text(&self, text: &str) -> Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl Clipboard for Denied {
        fn write_text(&self, _: &str) -> Result<()> {
            Err(SwatchError::Clipboard("denied".into()))
        }
    }

    fn app_with(config: SwatchConfig) -> Swatch {
        Swatch::with_config(config, PathBuf::from("/nonexistent/swatch.toml"), Arc::new(Recording::default()))
    }

    #[test]
    fn starts_on_configured_color() {
        let mut cfg = SwatchConfig::default();
        cfg.picker.initial = "#ff000080".into();
        let app = app_with(cfg);
        assert_eq!(app.state().picker_hex(), "#ff000080");
    }

    #[test]
    fn picker_gesture_updates_selected_color() {
        let mut app = app_with(SwatchConfig::default());
        let _ = app.update(Message::Picker(PickerInput::HexEdited("#00ff00".into())));
        assert_eq!(app.state().color, Color::rgb(0, 255, 0));

        let _ = app.update(Message::Picker(PickerInput::Alpha(0.0)));
        assert_eq!(app.state().picker_hex(), "#00ff0000");
    }

    #[test]
    fn invalid_hex_text_keeps_color() {
        let mut app = app_with(SwatchConfig::default());
        let before = app.state().color;
        let _ = app.update(Message::Picker(PickerInput::HexEdited("#zz".into())));
        let _ = app.update(Message::ColorPicked("nope".into()));
        assert_eq!(app.state().color, before);
    }

    #[test]
    fn successful_copy_shows_feedback_until_latest_timer_fires() {
        let mut app = app_with(SwatchConfig::default());
        let _ = app.update(Message::CopyFinished { notation: Notation::Hex, copied: true });
        assert!(app.state().copy.is_copied(Notation::Hex));

        // A second copy of the same row; its timer is the one that counts.
        let latest = app.state.copy.acknowledge(Notation::Hex);
        let _ = app.update(Message::CopyFeedbackExpired(latest));
        assert!(!app.state().copy.is_copied(Notation::Hex));
    }

    #[test]
    fn failed_copy_shows_nothing() {
        let mut app = app_with(SwatchConfig::default());
        let _ = app.update(Message::CopyFinished { notation: Notation::Rgb, copied: false });
        assert_eq!(app.state().copy.active().count(), 0);
    }

    #[tokio::test]
    async fn copy_writes_rendered_notation() {
        let clipboard = Arc::new(Recording::default());
        let app = Swatch::with_config(
            SwatchConfig::default(),
            PathBuf::from("/nonexistent/swatch.toml"),
            clipboard.clone(),
        );
        let text = app.state().render(Notation::Hsl, app.info.options());
        copy(clipboard.clone(), text).await.unwrap();
        assert_eq!(*clipboard.0.lock().unwrap(), ["hsl(206, 70%, 53%)"]);
    }

    #[tokio::test]
    async fn denied_clipboard_finishes_without_acknowledgment() {
        let res = copy(Arc::new(Denied), "x".into()).await;
        let msg = copy_finished(Notation::Cmyk, &res);
        assert!(matches!(msg, Message::CopyFinished { notation: Notation::Cmyk, copied: false }));

        let mut app = app_with(SwatchConfig::default());
        let _ = app.update(msg);
        assert!(!app.state().copy.is_copied(Notation::Cmyk));
    }

    #[tokio::test]
    async fn accepted_write_finishes_with_acknowledgment() {
        let res = copy(Arc::new(Recording::default()), "x".into()).await;
        let msg = copy_finished(Notation::Hsla, &res);
        assert!(matches!(msg, Message::CopyFinished { notation: Notation::Hsla, copied: true }));

        let mut app = app_with(SwatchConfig::default());
        let _ = app.update(msg);
        assert!(app.state().copy.is_copied(Notation::Hsla));
    }

    #[test]
    fn missing_config_loads_defaults() {
        let cfg = load_or_default(Path::new("/nonexistent/swatch.toml"));
        assert_eq!(cfg, SwatchConfig::default());
    }

    #[test]
    fn reload_switches_variant_but_keeps_color() {
        let mut app = app_with(SwatchConfig::default());
        let _ = app.update(Message::ColorPicked("#11223380".into()));

        let mut cfg = SwatchConfig::default();
        cfg.picker.variant = Variant::Opaque;
        cfg.display.utility_prefix = "text".into();
        app.apply_config(cfg);

        assert_eq!(app.state().picker_hex(), "#112233");
        assert_eq!(app.info.options().utility_prefix, "text");
        assert!(app.info.rows(app.state()).iter().all(|(n, _, _)| !n.uses_alpha()));
    }

    #[test]
    fn reload_of_missing_file_falls_back_to_defaults() {
        let mut cfg = SwatchConfig::default();
        cfg.display.brightness = true;
        let mut app = app_with(cfg);
        let _ = app.update(Message::ConfigReloaded);
        assert_eq!(app.config, SwatchConfig::default());
    }
}
