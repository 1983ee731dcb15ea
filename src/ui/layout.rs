// Main application layout
// Handles the menu bar, form, result regions, chat panel and alert window

use eframe::egui;

use crate::format::capitalize_first;
use crate::state::app_state::INDUSTRIES;
use crate::state::AppState;
use crate::ui::components::*;
use crate::ui::UiAction;

/// Canned questions offered under the chat box
pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "How are regulatory fines calculated?",
    "What prevention strategy do you recommend?",
    "How long will recovery take?",
    "What is the ROI of investing in security?",
];

/// Render the main application layout
/// Returns the actions the user triggered this frame
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let blocked = state.alert.is_some();

    render_menu_bar(ctx);

    egui::SidePanel::right("chat_panel")
        .resizable(true)
        .default_width(380.0)
        .min_width(280.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                render_chat_panel(ui, state, &mut actions);
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(!blocked, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    render_company_form(ui, state, &mut actions);

                    if state.loading {
                        ui.add_space(16.0);
                        ui.vertical_centered(|ui| {
                            ui.spinner();
                            ui.label(egui::RichText::new("Calculating breach impact...").weak());
                        });
                    }

                    if state.results_visible {
                        ui.add_space(16.0);
                        render_results(ui, state, &mut actions);
                    }
                    ui.add_space(16.0);
                });
        });
    });

    if let Some(message) = state.alert.clone() {
        render_alert(ctx, &message, &mut actions);
    }

    actions
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.set_visuals(if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    });
                }
            });
        });
    });
}

/// Render the company profile form
fn render_company_form(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    card(ui, "Company Profile", |ui| {
        egui::Grid::new("company_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Company size (employees)");
                ui.add(egui::TextEdit::singleline(&mut state.form.company_size).hint_text("e.g. 250"));
                ui.end_row();

                ui.label("Annual revenue ($)");
                ui.add(
                    egui::TextEdit::singleline(&mut state.form.annual_revenue)
                        .hint_text("e.g. 10000000"),
                );
                ui.end_row();

                ui.label("Industry");
                let selected = if state.form.industry.is_empty() {
                    "Select industry".to_string()
                } else {
                    capitalize_first(&state.form.industry)
                };
                egui::ComboBox::from_id_source("industry_select")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for industry in INDUSTRIES {
                            ui.selectable_value(
                                &mut state.form.industry,
                                industry.to_string(),
                                capitalize_first(industry),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Records compromised (optional)");
                ui.add(
                    egui::TextEdit::singleline(&mut state.form.records_compromised)
                        .hint_text("e.g. 10000"),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.add_enabled_ui(!state.loading, |ui| {
            if primary_button(ui, "Calculate Impact").clicked() {
                actions.push(UiAction::Calculate);
            }
        });
    });
}

/// Render every result region
fn render_results(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    let Some(results) = &state.results else {
        return;
    };

    card(ui, "Breach Scenario", |ui| {
        ui.label(&results.description);
        ui.label(egui::RichText::new(&results.severity).strong());
        labeled_value(ui, "Records affected:", &results.records_affected);
        labeled_value(ui, "Industry impact:", &results.industry_impact);
    });
    ui.add_space(12.0);

    card(ui, "Financial Impact", |ui| {
        ui.label(
            egui::RichText::new(&results.total_cost)
                .size(28.0)
                .strong()
                .color(tier_color(crate::state::EffectivenessTier::Danger)),
        );
        ui.label(egui::RichText::new("Total estimated cost").weak());
        ui.add_space(8.0);

        egui::Grid::new("financial_breakdown")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Direct costs", &results.direct_cost),
                    ("Regulatory fines", &results.regulatory_fines),
                    ("Revenue loss", &results.revenue_loss),
                    ("Reputation damage", &results.reputation_damage),
                    ("Recovery cost", &results.recovery_cost),
                ] {
                    ui.label(label);
                    ui.label(egui::RichText::new(value).strong());
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.collapsing("How this was calculated", |ui| {
            labeled_value(ui, "Cost per record:", &results.cost_per_record);
            labeled_value(ui, "GDPR fine rate:", &results.gdpr_fine_rate);
            labeled_value(ui, "Customer churn rate:", &results.churn_rate);
        });
    });
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Prevention", |ui| {
            labeled_value(ui, "Estimated cost:", &results.prevention_cost);
            labeled_value(ui, "ROI:", &results.prevention_roi);
        });
        card(&mut columns[1], "Recovery", |ui| {
            labeled_value(ui, "Estimated time:", &results.recovery_time);
        });
    });
    ui.add_space(12.0);

    if let Some(chart) = &state.chart {
        card(ui, "Cost Breakdown", |ui| {
            cost_chart(ui, chart);
        });
        ui.add_space(12.0);
    }

    card(ui, "Security Recommendations", |ui| {
        if state.recommendations_button_visible
            && primary_button(ui, "Get Recommendations").clicked()
        {
            actions.push(UiAction::FetchRecommendations);
        }

        if let Some(recommendations) = &state.recommendations {
            budget_card(ui, &recommendations.annual_security_budget);
            for rec in &recommendations.cards {
                ui.add_space(8.0);
                recommendation_card(ui, rec);
            }
        }
    });
}

/// Render the assistant chat panel
fn render_chat_panel(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
    ui.add_space(8.0);
    ui.heading("Security Assistant");
    ui.add_space(4.0);
    ui.separator();

    let input_height = 120.0;
    egui::ScrollArea::vertical()
        .id_source("chat_scroll")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .max_height((ui.available_height() - input_height).max(80.0))
        .show(ui, |ui| {
            if state.chat.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        egui::RichText::new("Run a calculation or ask a question")
                            .italics()
                            .weak(),
                    );
                });
            }
            for entry in state.chat.entries() {
                chat_bubble(ui, entry);
                ui.add_space(4.0);
            }
            if state.chat.is_waiting() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Assistant is typing...").weak());
                });
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.form.chat_input)
                .hint_text("Ask about your results...")
                .desired_width(ui.available_width() - 60.0),
        );
        let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Send").clicked() || enter {
            actions.push(UiAction::SendChat(state.form.chat_input.clone()));
            input.request_focus();
        }
    });

    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        for question in EXAMPLE_QUESTIONS {
            if ui.small_button(question).clicked() {
                actions.push(UiAction::SendChat(question.to_string()));
            }
        }
    });
}

/// Render the blocking alert window
fn render_alert(ctx: &egui::Context, message: &str, actions: &mut Vec<UiAction>) {
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(message);
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if primary_button(ui, "OK").clicked() {
                    actions.push(UiAction::DismissAlert);
                }
            });
        });
}
