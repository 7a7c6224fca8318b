use std::time::Duration;

use log::debug;
use roster_business::{LoadUsersCompute, UserListActions};

use crate::state::State;
use crate::widgets::{self, ToolbarAction};

/// How often to poll for the fetch result while it is in flight.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame. Starts the initial users fetch.
    pub fn new(mut state: State) -> Self {
        state.ctx.load_initial_users();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn apply_toolbar_action(&mut self, action: ToolbarAction) {
        debug!("toolbar action {action:?}");
        let ctx = &mut self.state.ctx;
        match action {
            ToolbarAction::ToggleColors => ctx.toggle_colors(),
            ToolbarAction::ToggleSortByCountry => ctx.toggle_sort_by_country(),
            ToolbarAction::Reset => ctx.reset_users(),
            ToolbarAction::Filter(filter) => ctx.set_filter_country(&filter),
        }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        self.state.ctx.run_computed();

        let sorting = self.state.ctx.user_list().sorting();
        let toolbar_actions = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let actions = widgets::toolbar(ui, sorting, &mut self.state.filter_draft);
                ui.add_space(4.0);
                actions
            })
            .inner;

        let intent = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.heading("Users");
                ui.add_space(4.0);
                widgets::users_panel(&self.state.ctx, ui)
            })
            .inner;

        let changed = !toolbar_actions.is_empty() || intent.is_some();
        for action in toolbar_actions {
            self.apply_toolbar_action(action);
        }
        if let Some(intent) = intent {
            debug!("table intent {intent:?}");
            self.state.ctx.apply_intent(intent);
        }

        self.state.ctx.run_computed();

        if changed {
            ctx.request_repaint();
        } else if self
            .state
            .ctx
            .cached::<LoadUsersCompute>()
            .is_some_and(LoadUsersCompute::is_pending)
        {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
