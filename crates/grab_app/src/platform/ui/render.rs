use eframe::egui::{self, Color32, Context, ProgressBar};
use grab_core::{AppViewModel, BarTint, Msg, NotificationKind, NotificationView};
use url::Url;

use super::constants::{
    ERROR_TEXT_COLOR, POLL_ERROR_COLOR, SUBMIT_ERROR_COLOR, SUCCESS_TEXT_COLOR, WINDOW_TITLE,
};

/// Draws the whole frame and returns the messages produced by user
/// interaction.
pub fn render(ctx: &Context, view: &AppViewModel, base_url: &Url) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(WINDOW_TITLE);
        ui.add_space(8.0);

        render_notifications(ui, view, base_url, &mut msgs);

        ui.label("Cole a URL do vídeo do YouTube:");
        let mut input = view.url_input.clone();
        let field = ui.text_edit_singleline(&mut input);
        if input != view.url_input {
            msgs.push(Msg::UrlChanged(input));
        }
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(view.submit_enabled, egui::Button::new("Baixar MP3"))
            .clicked();
        if (clicked || submitted) && view.submit_enabled {
            msgs.push(Msg::SubmitClicked);
        }

        if view.panel_visible {
            ui.add_space(12.0);
            render_progress_panel(ui, view);
        }
    });

    msgs
}

fn render_notifications(
    ui: &mut egui::Ui,
    view: &AppViewModel,
    base_url: &Url,
    msgs: &mut Vec<Msg>,
) {
    for notification in &view.notifications {
        ui.horizontal(|ui| {
            let (icon, color) = match notification.kind {
                NotificationKind::Success => ("✔", SUCCESS_TEXT_COLOR),
                NotificationKind::Error => ("⚠", ERROR_TEXT_COLOR),
            };
            match resolved_link(notification, base_url) {
                Some(target) => {
                    ui.colored_label(color, icon);
                    ui.hyperlink_to(&notification.text, target);
                }
                None => {
                    ui.colored_label(color, format!("{icon} {}", notification.text));
                }
            }
            if ui.small_button("✖").clicked() {
                msgs.push(Msg::NotificationDismissed {
                    id: notification.id,
                });
            }
        });
    }
    if !view.notifications.is_empty() {
        ui.add_space(8.0);
    }
}

fn render_progress_panel(ui: &mut egui::Ui, view: &AppViewModel) {
    let mut bar = ProgressBar::new(view.percent as f32 / 100.0).text(format!("{}%", view.percent));
    if let Some(color) = tint_color(view.bar_tint) {
        bar = bar.fill(color);
    }
    if view.bar_animated {
        bar = bar.animate(true);
    }
    ui.add(bar);
    ui.label(view.status.text());
}

fn tint_color(tint: BarTint) -> Option<Color32> {
    match tint {
        BarTint::Neutral => None,
        BarTint::SubmitError => Some(SUBMIT_ERROR_COLOR),
        BarTint::PollError => Some(POLL_ERROR_COLOR),
    }
}

fn resolved_link(notification: &NotificationView, base_url: &Url) -> Option<String> {
    let href = notification.link.as_deref()?;
    match base_url.join(href) {
        Ok(url) => Some(url.to_string()),
        // An unjoinable href is still worth surfacing as-is.
        Err(_) => Some(href.to_string()),
    }
}
