use std::fmt;
use std::sync::Arc;
use log::debug;

use crate::{
    Error,
    error::Result,
    contact::{ContactApi, ContactId, Field},
};

use super::{
    Route,
    Navbar,
    Transition,
    ContactForm,
    ContactListView,
    ContactDetailView,
    Mode,
};

/// The view mounted for the current route.
pub enum View {
    List(ContactListView),
    Form(ContactForm),
    Detail(ContactDetailView),
}

impl View {
    async fn mount(route: &Route, api: &dyn ContactApi) -> Self {
        match route {
            Route::List => {
                let mut view = ContactListView::new();
                view.mount(api).await;
                View::List(view)
            },
            Route::Add => {
                let mut form = ContactForm::new(Mode::New);
                form.mount(api).await;
                View::Form(form)
            },
            Route::Edit(id) => {
                let mut form = ContactForm::new(Mode::Editing(id.clone()));
                form.mount(api).await;
                View::Form(form)
            },
            Route::Detail(id) => {
                let mut view = ContactDetailView::new(id);
                view.mount(api).await;
                View::Detail(view)
            },
        }
    }

    fn name(&self) -> &'static str {
        match self {
            View::List(_) => "contact list",
            View::Form(_) => "contact form",
            View::Detail(_) => "contact detail",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::List(v) => write!(f, "{}", v),
            View::Form(v) => write!(f, "{}", v),
            View::Detail(v) => write!(f, "{}", v),
        }
    }
}

/// User intents delivered to the mounted view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    SetField(Field, String),
    Submit,
    Back,
    Delete(Option<ContactId>),
    ConfirmDelete,
    CancelDelete,
    DismissError,
}

/// Route-to-view composition over one shared contact client.
pub struct App {
    api     : Arc<dyn ContactApi>,
    navbar  : Navbar,
    route   : Route,
    view    : View,
}

impl App {
    pub async fn start(api: Arc<dyn ContactApi>, route: Route) -> Self {
        let view = View::mount(&route, api.as_ref()).await;
        Self {
            api,
            navbar: Navbar,
            route,
            view,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Drops the current view and mounts a fresh one for `route`.
    pub async fn navigate(&mut self, route: Route) {
        debug!("Navigating to {}", route);
        let api = Arc::clone(&self.api);
        self.view = View::mount(&route, api.as_ref()).await;
        self.route = route;
    }

    pub async fn open(&mut self, path: &str) -> Result<()> {
        let route = path.parse::<Route>()?;
        self.navigate(route).await;
        Ok(())
    }

    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        let api = Arc::clone(&self.api);
        let api = api.as_ref();

        let transition = match (&mut self.view, action) {
            (_, Action::Navigate(route)) => Transition::Navigate(route),
            (View::Form(form), Action::SetField(field, value)) => {
                if !form.set_field(field, &value) {
                    return Err(Error::State("Form is busy, try again later".into()));
                }
                Transition::Stay
            },
            (View::Form(form), Action::Submit) => form.submit(api).await,
            (View::Form(form), Action::Back) => form.back(),
            (View::Detail(_), Action::Back) => Transition::Navigate(Route::List),
            (View::List(list), Action::Delete(Some(id))) => {
                list.request_delete(&id)?;
                Transition::Stay
            },
            (View::Detail(detail), Action::Delete(id)) => {
                if let Some(id) = id.as_ref() {
                    if id != detail.id() {
                        return Err(Error::Argument(format!("Contact {} is not displayed", id)));
                    }
                }
                detail.request_delete()?;
                Transition::Stay
            },
            (View::List(list), Action::ConfirmDelete) => list.confirm_delete(api).await,
            (View::Detail(detail), Action::ConfirmDelete) => detail.confirm_delete(api).await,
            (View::List(list), Action::CancelDelete) => {
                list.decline_delete();
                Transition::Stay
            },
            (View::Detail(detail), Action::CancelDelete) => {
                detail.decline_delete();
                Transition::Stay
            },
            (view, Action::DismissError) => {
                match view {
                    View::List(v) => v.dismiss_error(),
                    View::Form(v) => v.dismiss_error(),
                    View::Detail(v) => v.dismiss_error(),
                }
                Transition::Stay
            },
            (view, action) => {
                return Err(Error::State(format!(
                    "Action {:?} is not available on the {} view", action, view.name()
                )));
            }
        };

        if let Transition::Navigate(route) = transition {
            self.navigate(route).await;
        }
        Ok(())
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.navbar)?;
        writeln!(f)?;
        write!(f, "{}", self.view)
    }
}
