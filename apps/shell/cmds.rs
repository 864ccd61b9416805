use clap::{error, Arg, ArgMatches, Command};

use contacts::{
    Action,
    ContactId,
    Field,
    Route,
};

pub(crate) fn build_cli() -> Command {
    let mut cmd = Command::new("contacts")
        .about("Interactive contact manager shell")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("go")
                .about("Open a route: /, /add, /edit/ID or /contact/ID")
                .arg(Arg::new("PATH").required(true))
        )
        .subcommand(Command::new("list").about("Show all contacts"))
        .subcommand(Command::new("add").about("Open the new contact form"))
        .subcommand(
            Command::new("view")
                .about("Show a single contact")
                .arg(Arg::new("ID").required(true))
        )
        .subcommand(
            Command::new("edit")
                .about("Open the edit form of a contact")
                .arg(Arg::new("ID").required(true))
        )
        .subcommand(
            Command::new("set")
                .about("Set a form field: name, email, phone, company, address, notes")
                .arg(Arg::new("FIELD").required(true))
                .arg(Arg::new("VALUE").num_args(0..))
        )
        .subcommand(Command::new("submit").about("Save the form"))
        .subcommand(Command::new("back").about("Leave the current page"))
        .subcommand(
            Command::new("delete")
                .about("Delete a contact, asks for confirmation")
                .arg(Arg::new("ID"))
        )
        .subcommand(Command::new("yes").about("Confirm the pending delete"))
        .subcommand(Command::new("no").about("Cancel the pending delete"))
        .subcommand(Command::new("dismiss").about("Dismiss the error banner"))
        .subcommand(Command::new("show").about("Render the current page again"))
        .help_template("{subcommands}");

    cmd.error(error::ErrorKind::InvalidSubcommand, "Invalid command provided");
    cmd
}

/// Maps a parsed command line to an app action; `Ok(None)` only re-renders.
pub(crate) fn to_action(matches: &ArgMatches) -> Result<Option<Action>, String> {
    let id = |m: &ArgMatches| {
        m.get_one::<String>("ID").map(|v| ContactId::new(v))
    };

    let action = match matches.subcommand() {
        Some(("go", m)) => {
            let path = m.get_one::<String>("PATH").map(|v| v.as_str()).unwrap_or("/");
            let route = path.parse::<Route>().map_err(|e| e.to_string())?;
            Action::Navigate(route)
        },
        Some(("list", _)) => Action::Navigate(Route::List),
        Some(("add", _)) => Action::Navigate(Route::Add),
        Some(("view", m)) => match id(m) {
            Some(id) => Action::Navigate(Route::Detail(id)),
            None => return Err("missing contact id".into()),
        },
        Some(("edit", m)) => match id(m) {
            Some(id) => Action::Navigate(Route::Edit(id)),
            None => return Err("missing contact id".into()),
        },
        Some(("set", m)) => {
            let field = m.get_one::<String>("FIELD")
                .ok_or_else(|| "missing field name".to_string())?
                .parse::<Field>()
                .map_err(|e| e.to_string())?;
            let value = m.get_many::<String>("VALUE")
                .map(|v| v.map(|s| s.as_str()).collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            Action::SetField(field, value)
        },
        Some(("submit", _)) => Action::Submit,
        Some(("back", _)) => Action::Back,
        Some(("delete", m)) => Action::Delete(id(m)),
        Some(("yes", _)) => Action::ConfirmDelete,
        Some(("no", _)) => Action::CancelDelete,
        Some(("dismiss", _)) => Action::DismissError,
        Some(("show", _)) => return Ok(None),
        _ => return Err("command not found".into()),
    };
    Ok(Some(action))
}
