// Command execution

use std::io::Write;

use anyhow::{anyhow, bail, Result};
use homeinv_config::{AppConfig, ConfigManager};
use homeinv_domain::{EntityId, Home};
use homeinv_presentation::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;

use crate::{
    app::App,
    cli::{Command, ConfigAction},
    output::OutputStyle,
};

/// Wait for the screen's tasks and fail with its error message, if any
async fn settled<S: Screen>(screen: &S) -> Result<S::State> {
    screen.settle().await;
    let state = screen.snapshot();
    if let Some(error) = state.error().map(str::to_string) {
        bail!(error);
    }
    Ok(state)
}

fn effects<S: Screen>(screen: &S) -> Result<UnboundedReceiver<S::Effect>> {
    screen
        .effects()
        .ok_or_else(|| anyhow!("screen effects were already taken"))
}

fn write_homes(out: &mut impl Write, style: &OutputStyle, title: &str, homes: &[Home]) -> Result<()> {
    writeln!(out, "{}", style.header(title))?;
    if homes.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for home in homes {
        writeln!(out, "  [{}] {}", home.id, home.name)?;
    }
    Ok(())
}

/// Run one remote command against `app`
pub async fn execute(
    app: &App,
    command: Command,
    style: &OutputStyle,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            let screen = app.login_screen();
            let mut effects = effects(&screen)?;
            screen.dispatch(LoginEvent::UsernameChanged(username));
            screen.dispatch(LoginEvent::PasswordChanged(password));
            screen.dispatch(LoginEvent::Login);
            settled(&screen).await?;

            if let Ok(LoginEffect::LoggedIn(user_id)) = effects.try_recv() {
                writeln!(out, "{}", style.success(&format!("Logged in as user {}", user_id)))?;
            }
        }

        Command::Register { username, password, email } => {
            let screen = app.register_screen();
            let mut effects = effects(&screen)?;
            screen.dispatch(RegisterEvent::UsernameChanged(username));
            screen.dispatch(RegisterEvent::PasswordChanged(password));
            screen.dispatch(RegisterEvent::EmailChanged(email));
            screen.dispatch(RegisterEvent::Register);
            settled(&screen).await?;

            if let Ok(RegisterEffect::Registered) = effects.try_recv() {
                writeln!(out, "{}", style.success("Account created"))?;
            }
        }

        Command::Homes { user_id } => {
            app.session().set_user(user_id);
            let screen = app.my_homes_screen();
            screen.dispatch(MyHomesEvent::GetHomes(user_id));
            let state = settled(&screen).await?;

            write_homes(out, style, "Owned homes", &state.owned)?;
            write_homes(out, style, "Member of", &state.member)?;
        }

        Command::Home { id, user_id } => {
            if let Some(user_id) = user_id {
                app.session().set_user(user_id);
            }
            let screen = app.home_screen();
            screen.dispatch(HomeEvent::GetHome(id));
            screen.dispatch(HomeEvent::GetHomeUsers(id));
            let state = settled(&screen).await?;

            if let Some(home) = &state.home {
                writeln!(out, "{}", style.header(&format!("[{}] {}", home.id, home.name)))?;
            }
            if let Some(owner) = &state.owner {
                writeln!(out, "  owner: {} <{}>", owner.username, owner.email)?;
            }
            for member in &state.members {
                writeln!(out, "  member: {} <{}>", member.username, member.email)?;
            }
            if state.is_owner {
                writeln!(out, "{}", style.info("You own this home"))?;
            }
        }

        Command::Rooms { home_id } => {
            app.session().set_home(home_id);
            let screen = app.rooms_screen();
            screen.dispatch(RoomsEvent::GetRooms(home_id));
            let state = settled(&screen).await?;

            writeln!(out, "{}", style.header("Rooms"))?;
            if state.rooms.is_empty() {
                writeln!(out, "  (none)")?;
            }
            for room in &state.rooms {
                writeln!(out, "  [{}] {}", room.id, room.name)?;
            }
        }

        Command::Search { home_id, word } => {
            let screen = app.search_screen();
            screen.dispatch(SearchEvent::GetSearch { home_id, word });
            let state = settled(&screen).await?;

            if let Some(notice) = state.notice() {
                writeln!(out, "{}", style.info(notice))?;
            }
            for item in &state.items {
                writeln!(out, "  [{}] {} (compartment {})", item.id, item.name, item.compartment_id)?;
            }
        }

        Command::Item { id } => {
            let screen = app.item_screen();
            screen.dispatch(ItemEvent::GetItem(id));
            screen.dispatch(ItemEvent::GetItemRoute(id));
            let state = settled(&screen).await?;

            if let Some(item) = &state.item {
                writeln!(out, "{}", style.header(&format!("[{}] {}", item.id, item.name)))?;
                if !item.tags.is_empty() {
                    let tags: Vec<_> = item.tags.iter().map(|t| t.name.as_str()).collect();
                    writeln!(out, "  tags: {}", tags.join(", "))?;
                }
            }
            if let Some(route) = &state.route {
                writeln!(out, "  location: {}", route)?;
            }
        }

        Command::Invitations { user_id } => {
            app.session().set_user(user_id);
            let screen = app.account_screen();
            screen.dispatch(AccountEvent::GetInvitations(user_id));
            let state = settled(&screen).await?;

            writeln!(out, "{}", style.header("Invitations"))?;
            if state.invitations.is_empty() {
                writeln!(out, "  (none)")?;
            }
            for invitation in &state.invitations {
                screen.dispatch(AccountEvent::GetInvitationInfo(invitation.id));
                screen.settle().await;
                let state = screen.snapshot();
                if let Some(error) = state.error() {
                    warn!(invitation = invitation.id, "Invitation details unavailable: {}", error);
                    screen.dispatch(AccountEvent::ErrorDisplayed);
                }
                let info = state.invitation_info.filter(|info| info.id == invitation.id);
                match info {
                    Some(info) => writeln!(
                        out,
                        "  [{}] {} invited you to {}",
                        info.id, info.inviter_name, info.home_name
                    )?,
                    None => writeln!(out, "  [{}] home {}", invitation.id, invitation.home_id)?,
                }
            }
        }

        Command::Accept { id } => resolve_invitation(app, id, true, style, out).await?,

        Command::Decline { id } => resolve_invitation(app, id, false, style, out).await?,

        Command::Invite { user_id, home_id, username } => {
            app.session().set_user(user_id);
            app.session().set_home(home_id);
            let screen = app.home_screen();
            let mut effects = effects(&screen)?;
            screen.dispatch(HomeEvent::InviteUser(username.clone()));
            settled(&screen).await?;

            if let Ok(HomeEffect::InvitationSent) = effects.try_recv() {
                writeln!(out, "{}", style.success(&format!("Invitation sent to {}", username)))?;
            }
        }

        Command::Config { action } => bail!("config {:?} does not talk to the service", action),
    }

    Ok(())
}

async fn resolve_invitation(
    app: &App,
    id: EntityId,
    accept: bool,
    style: &OutputStyle,
    out: &mut impl Write,
) -> Result<()> {
    let screen = app.account_screen();
    let mut effects = effects(&screen)?;
    screen.dispatch(if accept {
        AccountEvent::AcceptInvitation(id)
    } else {
        AccountEvent::RejectInvitation(id)
    });
    settled(&screen).await?;

    if let Ok(AccountEffect::InvitationResolved(id)) = effects.try_recv() {
        let verb = if accept { "accepted" } else { "declined" };
        writeln!(out, "{}", style.success(&format!("Invitation {} {}", id, verb)))?;
    }
    Ok(())
}

/// `config show` and `config init`
pub fn config(
    manager: &ConfigManager,
    config: &AppConfig,
    action: ConfigAction,
    style: &OutputStyle,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            write!(out, "{}", toml::to_string_pretty(config)?)?;
        }
        ConfigAction::Init { force } => {
            let path = manager.config_path();
            if path.exists() && !force {
                bail!("{} already exists, use --force to overwrite", path.display());
            }
            manager.save_config(config)?;
            writeln!(out, "{}", style.success(&format!("Wrote {}", path.display())))?;
        }
    }
    Ok(())
}
