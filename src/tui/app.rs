//! Application loop and screen routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;
use ratatui::DefaultTerminal;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::api::Api;
use crate::config::Config;
use crate::model::Session;
use crate::session::SessionStore;

use super::nav::{Nav, NavAction, Page};
use super::screens::{
    BoardScreen, FeedScreen, ForgotPasswordAction, ForgotPasswordScreen, HomeScreen, LoginAction,
    LoginScreen, RegisterAction, RegisterScreen,
};

/// Which screen is currently displayed.
enum Screen {
    Login(LoginScreen),
    Register(RegisterScreen),
    ForgotPassword(ForgotPasswordScreen),
    Dashboard(Dashboard),
}

/// The signed-in shell: sidebar plus the active page.
struct Dashboard {
    session: Session,
    nav: Nav,
    page: PageState,
    sidebar_focused: bool,
}

enum PageState {
    Home(HomeScreen),
    Board(BoardScreen),
    Feed(FeedScreen),
}

impl Dashboard {
    fn new(session: Session) -> Self {
        Self {
            nav: Nav::new(),
            page: PageState::Home(HomeScreen::new(session.clone())),
            session,
            sidebar_focused: false,
        }
    }

    /// Switches the content pane. Page state starts fresh on every visit.
    fn open(&mut self, page: Page, api: &Api, page_size: usize) {
        self.nav.set_active(page);
        self.page = match page {
            Page::Home => PageState::Home(HomeScreen::new(self.session.clone())),
            Page::Board => PageState::Board(BoardScreen::new()),
            Page::Feed => PageState::Feed(FeedScreen::new(api, page_size)),
        };
    }

    fn render(&self, frame: &mut Frame) {
        let sidebar_width = if self.nav.collapsed() { 5 } else { 26 };
        let chunks =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
                .split(frame.area());
        self.nav
            .render(frame, chunks[0], &self.session, self.sidebar_focused);
        match &self.page {
            PageState::Home(s) => s.render(frame, chunks[1]),
            PageState::Board(s) => s.render(frame, chunks[1]),
            PageState::Feed(s) => s.render(frame, chunks[1]),
        }
    }
}

/// Runs the TUI until the user quits.
pub fn run(config: &Config, store: &SessionStore) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config, store);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    config: &Config,
    store: &SessionStore,
) -> io::Result<()> {
    let mut api = Api::new(config);

    // A stored session skips the auth screens entirely.
    let mut screen = match store.load().map_err(io::Error::other)? {
        Some(session) => {
            api.set_token(session.token.clone());
            Screen::Dashboard(Dashboard::new(session))
        }
        None => Screen::Login(LoginScreen::new()),
    };

    loop {
        terminal.draw(|frame| match &screen {
            Screen::Login(s) => s.render(frame),
            Screen::Register(s) => s.render(frame),
            Screen::ForgotPassword(s) => s.render(frame),
            Screen::Dashboard(d) => d.render(frame),
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match &mut screen {
                Screen::Login(login) => match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Up => login.move_up(),
                    KeyCode::Down | KeyCode::Tab => login.move_down(),
                    KeyCode::Backspace => login.on_backspace(),
                    KeyCode::Char(c) => login.on_char(c),
                    KeyCode::Enter => {
                        if let Some(action) = login.on_enter() {
                            match action {
                                LoginAction::Submit { email, password } => {
                                    match api.login(&email, &password) {
                                        Ok(session) => {
                                            store.save(&session).map_err(io::Error::other)?;
                                            screen = Screen::Dashboard(Dashboard::new(session));
                                        }
                                        Err(e) => login.set_api_error(e.to_string()),
                                    }
                                }
                                LoginAction::GoRegister => {
                                    screen = Screen::Register(RegisterScreen::new());
                                }
                                LoginAction::GoForgotPassword => {
                                    screen = Screen::ForgotPassword(ForgotPasswordScreen::new());
                                }
                            }
                        }
                    }
                    _ => {}
                },

                Screen::Register(register) => match key.code {
                    KeyCode::Esc => screen = Screen::Login(LoginScreen::new()),
                    KeyCode::Up => register.move_up(),
                    KeyCode::Down | KeyCode::Tab => register.move_down(),
                    KeyCode::Backspace => register.on_backspace(),
                    KeyCode::Char(c) => register.on_char(c),
                    KeyCode::Enter => {
                        if let Some(action) = register.on_enter() {
                            match action {
                                RegisterAction::Submit {
                                    first_name,
                                    last_name,
                                    email,
                                    password,
                                } => {
                                    // Register, then sign straight in.
                                    let signed_in = api
                                        .register(&first_name, &last_name, &email, &password)
                                        .and_then(|()| api.login(&email, &password));
                                    match signed_in {
                                        Ok(session) => {
                                            store.save(&session).map_err(io::Error::other)?;
                                            screen = Screen::Dashboard(Dashboard::new(session));
                                        }
                                        Err(e) => register.set_api_error(e.to_string()),
                                    }
                                }
                                RegisterAction::GoLogin => {
                                    screen = Screen::Login(LoginScreen::new());
                                }
                            }
                        }
                    }
                    _ => {}
                },

                Screen::ForgotPassword(forgot) => match key.code {
                    KeyCode::Esc => screen = Screen::Login(LoginScreen::new()),
                    KeyCode::Up => forgot.move_up(),
                    KeyCode::Down | KeyCode::Tab => forgot.move_down(),
                    KeyCode::Backspace => forgot.on_backspace(),
                    KeyCode::Char(c) => forgot.on_char(c),
                    KeyCode::Enter => {
                        if let Some(action) = forgot.on_enter() {
                            match action {
                                ForgotPasswordAction::Submit { email } => {
                                    match api.forgot_password(&email) {
                                        Ok(()) => forgot.set_notice(
                                            "Password reset instructions sent to your email"
                                                .to_string(),
                                        ),
                                        Err(e) => {
                                            warn!("password reset failed: {e}");
                                            forgot.set_api_error(
                                                "Failed to reset password. Please try again later."
                                                    .to_string(),
                                            );
                                        }
                                    }
                                }
                                ForgotPasswordAction::GoLogin => {
                                    screen = Screen::Login(LoginScreen::new());
                                }
                            }
                        }
                    }
                    _ => {}
                },

                Screen::Dashboard(dash) => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('b') => dash.nav.toggle_collapsed(),
                    KeyCode::Tab => dash.sidebar_focused = !dash.sidebar_focused,
                    _ if dash.sidebar_focused => match key.code {
                        KeyCode::Up | KeyCode::Char('k') => dash.nav.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => dash.nav.move_down(),
                        KeyCode::Esc => dash.sidebar_focused = false,
                        KeyCode::Enter => {
                            if let Some(action) = dash.nav.select() {
                                match action {
                                    NavAction::Go(page) => {
                                        dash.open(page, &api, config.page_size);
                                        dash.sidebar_focused = false;
                                    }
                                    NavAction::Logout => {
                                        store.clear().map_err(io::Error::other)?;
                                        api.clear_token();
                                        screen = Screen::Login(LoginScreen::new());
                                    }
                                }
                            }
                        }
                        _ => {}
                    },
                    _ => match &mut dash.page {
                        PageState::Home(_) => {}
                        PageState::Board(board) => board.on_key(key.code),
                        PageState::Feed(feed) => feed.on_key(key.code, &api, config.page_size),
                    },
                },
            }
        }
    }
}
