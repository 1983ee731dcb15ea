// Reusable UI components
// Provides badges, cards, chat bubbles and the cost chart

use eframe::egui;

use crate::state::chart::{CostChart, BAR_FILL_ALPHA, CHART_TITLE};
use crate::state::{ChatEntry, ChatRole, EffectivenessTier, RecommendationCard};

/// Colour of an effectiveness tier
/// Info (cyan), Primary (blue), Success (green), Danger (red)
pub fn tier_color(tier: EffectivenessTier) -> egui::Color32 {
    match tier {
        EffectivenessTier::Info => egui::Color32::from_rgb(13, 202, 240),
        EffectivenessTier::Primary => egui::Color32::from_rgb(13, 110, 253),
        EffectivenessTier::Success => egui::Color32::from_rgb(25, 135, 84),
        EffectivenessTier::Danger => egui::Color32::from_rgb(220, 53, 69),
    }
}

/// Render an effectiveness badge: label on a filled tier-coloured pill
pub fn effectiveness_badge(ui: &mut egui::Ui, label: &str, tier: EffectivenessTier) {
    egui::Frame::none()
        .fill(tier_color(tier))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(label)
                    .color(egui::Color32::WHITE)
                    .size(12.0)
                    .strong(),
            );
        });
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(egui::RichText::new(text).strong())
}

/// Card container used by every result region
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).heading().size(16.0));
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(6.0);
            add_contents(ui)
        })
        .inner
}

/// A "Label: value" row
pub fn labeled_value(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.add_space(8.0);
        ui.label(value);
    });
}

/// Budget summary card shown above the recommendations
pub fn budget_card(ui: &mut egui::Ui, budget: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Recommended Annual Security Budget")
                        .heading()
                        .size(18.0),
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(budget)
                        .size(26.0)
                        .strong()
                        .color(tier_color(EffectivenessTier::Primary)),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Based on your company profile and potential breach impact")
                        .weak(),
                );
            });
        });
}

/// One recommendation card
pub fn recommendation_card(ui: &mut egui::Ui, rec: &RecommendationCard) {
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&rec.title).strong().size(15.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    effectiveness_badge(ui, &rec.effectiveness, rec.tier);
                });
            });
            ui.add_space(4.0);
            ui.label(&rec.description);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.label(egui::RichText::new(&rec.cost).strong());
            });
        });
}

/// Chat bubble; user messages are right-aligned
pub fn chat_bubble(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (align, fill, icon) = match entry.role {
        ChatRole::User => (
            egui::Align::Max,
            egui::Color32::from_rgb(13, 110, 253),
            "👤",
        ),
        ChatRole::Bot => (
            egui::Align::Min,
            ui.visuals().extreme_bg_color,
            "🤖",
        ),
    };
    let text_color = match entry.role {
        ChatRole::User => egui::Color32::WHITE,
        ChatRole::Bot => ui.visuals().text_color(),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.85);
                ui.horizontal_wrapped(|ui| {
                    ui.label(icon);
                    ui.label(egui::RichText::new(&entry.text).color(text_color));
                });
            });
        ui.label(
            egui::RichText::new(entry.sent_at.format("%H:%M").to_string())
                .weak()
                .small(),
        );
    });
}

/// Render the cost breakdown bar chart with y-axis ticks and hover tooltips
pub fn cost_chart(ui: &mut egui::Ui, chart: &CostChart) {
    const HEIGHT: f32 = 280.0;
    const AXIS_WIDTH: f32 = 64.0;
    const LABEL_HEIGHT: f32 = 36.0;

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(CHART_TITLE).strong());
    });
    ui.add_space(4.0);

    let width = ui.available_width().max(320.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, HEIGHT), egui::Sense::hover());
    let rect = response.rect;
    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.left() + AXIS_WIDTH, rect.top() + 8.0),
        egui::pos2(rect.right() - 8.0, rect.bottom() - LABEL_HEIGHT),
    );

    let text_color = ui.visuals().text_color();
    let grid_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let font = egui::FontId::proportional(11.0);
    let axis_max = chart.axis_max();
    let y_for = |value: f64| -> f32 {
        plot.bottom() - (value / axis_max) as f32 * plot.height()
    };

    // Y axis ticks and grid lines
    for (value, label) in chart.tick_labels() {
        let y = y_for(value);
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            egui::Stroke::new(0.5, grid_color),
        );
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            label,
            font.clone(),
            text_color,
        );
    }

    // Bars
    let slot = plot.width() / chart.bars.len().max(1) as f32;
    let bar_width = slot * 0.6;
    let hover = response.hover_pos();
    let mut hovered_tooltip = None;

    for (i, bar) in chart.bars.iter().enumerate() {
        let center_x = plot.left() + slot * (i as f32 + 0.5);
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(center_x - bar_width / 2.0, y_for(bar.value.max(0.0))),
            egui::pos2(center_x + bar_width / 2.0, plot.bottom()),
        );
        let (r, g, b) = bar.color;
        painter.rect_filled(
            bar_rect,
            0.0,
            egui::Color32::from_rgba_unmultiplied(r, g, b, BAR_FILL_ALPHA),
        );
        painter.rect_stroke(
            bar_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_rgb(r, g, b)),
        );
        painter.text(
            egui::pos2(center_x, plot.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            bar.label,
            font.clone(),
            text_color,
        );

        if hover.is_some_and(|pos| bar_rect.contains(pos)) {
            hovered_tooltip = Some(bar.tooltip());
        }
    }

    // X axis
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        egui::Stroke::new(1.0, text_color),
    );

    if let Some(tooltip) = hovered_tooltip {
        response.on_hover_text_at_pointer(tooltip);
    }
}
