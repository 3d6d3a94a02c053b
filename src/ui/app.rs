use chrono::Local;
use tokio::sync::mpsc;

use crate::common::{
    ChannelNotifier, Location, Notifier, Page, Severity, StoreResult, Theme, UiEvent,
};
use crate::config;
use crate::controllers::dataset::demo_interviews;
use crate::controllers::{InterviewRoom, JobBoard, Messaging};
use crate::storage::{Profile, SessionStore};

use super::components::jobs_page::{self, CREDIT_TOP_UP, JobsView};
use super::components::{
    chat_area, conversation_list, info_panel, input_bar, interview_table, nav_bar, session_panel,
    toasts,
};
use super::state::AppState;

type Board = JobBoard<Box<dyn SessionStore>, ChannelNotifier>;

pub struct TalentTrackApp {
    state: AppState,
    interview_room: InterviewRoom,
    messaging: Messaging,
    job_board: Board,
    notifier: ChannelNotifier,
    event_receiver: mpsc::Receiver<UiEvent>,
    applied_theme: Option<Theme>,
    config_path: String,
}

impl TalentTrackApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        location: Location,
        config_path: String,
        store: Box<dyn SessionStore>,
        event_sender: mpsc::Sender<UiEvent>,
        event_receiver: mpsc::Receiver<UiEvent>,
    ) -> Self {
        let now = Local::now();
        let notifier = ChannelNotifier::new(event_sender);
        Self {
            state: AppState::new(location),
            interview_room: InterviewRoom::new(location.view, &demo_interviews(now), now),
            messaging: Messaging::new(location.view),
            job_board: JobBoard::new(Profile::new(store), notifier.clone()),
            notifier,
            event_receiver,
            applied_theme: None,
            config_path,
        }
    }

    fn profile(&self) -> &Profile<Box<dyn SessionStore>> {
        self.job_board.profile()
    }

    fn handle_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                UiEvent::Tick(now) => {
                    self.interview_room.tick(now);
                    self.messaging.tick(now);
                    self.state.expire_toasts(now);
                }
                UiEvent::Notify(notification) => {
                    self.state.push_toast(notification, Local::now());
                }
            }
        }
    }

    /// Log and surface a failed store write; the page keeps rendering.
    fn report<T>(&self, action: &str, result: StoreResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("Failed to {action}: {err}");
                self.notifier
                    .notify(format!("Could not {action}."), Severity::Error);
                None
            }
        }
    }

    fn navigate(&mut self, target: Location) {
        let previous = self.state.location;
        self.state.location = target;
        let href = target.to_href();
        log::info!("Navigating to {href}");
        config::remember_location(&self.config_path, &href);

        // A new view role is a fresh page load for the role-scoped pages.
        if target.view != previous.view {
            let now = Local::now();
            self.interview_room = InterviewRoom::new(target.view, &demo_interviews(now), now);
            self.messaging = Messaging::new(target.view);
            self.state.reset_view_inputs();
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.profile().theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(match theme {
                Theme::Dark => egui::Visuals::dark(),
                Theme::Light => egui::Visuals::light(),
            });
            self.applied_theme = Some(theme);
        }
    }

    fn show_interview_room(&mut self, ctx: &egui::Context) {
        let snapshot = self.interview_room.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            let actions = interview_table::render(ui, &snapshot, &mut self.state.filters);
            if actions.filters_changed {
                self.interview_room
                    .set_filters(self.state.filters.to_filters(), Local::now());
            }
            if let Some(id) = actions.join
                && !self.interview_room.open_session(id, Local::now())
            {
                log::warn!("Interview {id} is not listed in this view");
            }
        });

        if let Some(session) = &snapshot.session
            && session_panel::render(ctx, session)
        {
            self.interview_room.close_session();
        }
    }

    fn show_messaging(&mut self, ctx: &egui::Context) {
        let snapshot = self.messaging.frame(Local::now());

        egui::SidePanel::left("conversation_list")
            .default_width(260.0)
            .show(ctx, |ui| {
                let actions = conversation_list::render(ui, &snapshot, self.messaging.search());
                if let Some(term) = actions.search {
                    self.messaging.set_search(&term);
                }
                if let Some(id) = actions.select {
                    self.messaging.select_conversation(&id);
                }
            });

        egui::SidePanel::right("conversation_info")
            .default_width(220.0)
            .show(ctx, |ui| {
                info_panel::render(ui, &snapshot.detail);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat_area::render(ui, &snapshot.detail, snapshot.typing_visible);

            ui.separator();
            if let Some(text) = input_bar::render(ui, &mut self.state.chat_input) {
                self.messaging.send_message(&text, Local::now());
            }
        });

        if let Some(wait) = self.messaging.next_deadline(Local::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    fn show_jobs(&mut self, ctx: &egui::Context) {
        let profile = self.profile();
        let view = JobsView {
            listings: self.job_board.listings(),
            applications: self.job_board.applications(),
            role: profile.user_role(),
            user_name: profile.user_name(),
            company_name: profile.company_name(),
            xp: profile.xp(),
            company_credits: profile.company_credits(),
        };

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                jobs_page::render(ui, &view, &mut self.state.sign_in, &mut self.state.job_draft)
            })
            .inner;

        let now = Local::now();
        if let Some(listing) = actions.apply {
            let result = self.job_board.apply(&listing, now);
            self.report("submit the application", result);
        }
        if actions.post {
            let result = self.job_board.post_job(&self.state.job_draft, now);
            if self.report("post the job", result) == Some(true) {
                self.state.job_draft = Default::default();
            }
        }
        if actions.sign_in {
            self.sign_in();
        }
        if actions.sign_out {
            let result = self.profile().sign_out();
            self.report("sign out", result);
        }
        if actions.top_up {
            let result = self.profile().award_company_credits(CREDIT_TOP_UP);
            self.report("add company credits", result);
        }
    }

    fn sign_in(&mut self) {
        let inputs = &self.state.sign_in;
        let name = inputs.name.trim();
        if name.is_empty() {
            self.notifier
                .notify("Enter your name to sign in.".to_string(), Severity::Error);
            return;
        }
        let company = inputs.company.trim();
        let company = (inputs.role.can_post_jobs() && !company.is_empty()).then_some(company);

        let result = self.profile().sign_in(inputs.role, name, company);
        if self.report("sign in", result).is_some() {
            log::info!("Signed in as {name} ({})", inputs.role.as_str());
            self.state.sign_in = Default::default();
        }
    }
}

impl eframe::App for TalentTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_events();
        self.apply_theme(ctx);

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            let actions = nav_bar::render(ui, self.state.location, self.profile().theme());
            if actions.toggle_theme {
                let result = self.profile().toggle_theme();
                self.report("save the theme", result);
            }
            if let Some(target) = actions.navigate {
                self.navigate(target);
            }
        });

        match self.state.location.page {
            Page::InterviewRoom => self.show_interview_room(ctx),
            Page::Messaging => self.show_messaging(ctx),
            Page::Jobs => self.show_jobs(ctx),
        }

        toasts::render(ctx, &self.state.toasts);
    }
}
