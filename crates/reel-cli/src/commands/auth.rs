use reel_core::ReelError;

use crate::app::AppContext;
use crate::cli::{LoginArgs, SignupArgs, WhoamiArgs};
use crate::errors::CliError;
use crate::helpers::{read_email, read_password};
use crate::output::{print_json, print_user};
use crate::ui::{badge, hint, print, receipt, Badge};

pub fn handle_login(ctx: &AppContext, args: &LoginArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = ui_ctx.is_interactive();
    let email = read_email(args.email.as_deref(), interactive)?;
    let password = read_password(args.password.as_deref(), interactive)?;

    let mut session = ctx.session()?;
    let user = match session.login(&email, &password) {
        Ok(user) => user,
        Err(ReelError::Auth(message)) => {
            return Err(CliError::auth_failed_with_hint(
                message,
                "The demo account is demo@example.com / password.",
            )
            .into())
        }
        Err(err) => return Err(err.into()),
    };

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Signed in as {}", user.username),
                &[("Email", &user.email)],
            ),
        );
    }
    Ok(())
}

pub fn handle_signup(ctx: &AppContext, args: &SignupArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let password = read_password(args.password.as_deref(), ui_ctx.is_interactive())?;

    let mut session = ctx.session()?;
    let user = session.signup(&args.email, &args.username, &password)?;

    if !ctx.quiet() {
        let id = user.id.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Created account {}", user.username),
                &[("Email", &user.email), ("ID", &id)],
            ),
        );
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &hint(&ui_ctx, "reel list"));
        }
    }
    Ok(())
}

pub fn handle_logout(ctx: &AppContext) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    let was_signed_in = session.state().is_authenticated;
    session.logout()?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        if ui_ctx.mode.is_pretty() {
            let (kind, message) = if was_signed_in {
                (Badge::Ok, "Signed out")
            } else {
                (Badge::Warn, "Not signed in")
            };
            print(&ui_ctx, &badge(&ui_ctx, kind, message));
        } else {
            println!("status=ok");
        }
    }
    Ok(())
}

pub fn handle_whoami(ctx: &AppContext, args: &WhoamiArgs) -> anyhow::Result<()> {
    let session = ctx.session()?;
    let user = session.state().user.as_ref().ok_or_else(|| {
        CliError::auth_failed_with_hint("Not signed in", "Run `reel login` or `reel signup`.")
    })?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        return print_json(user);
    }
    print_user(&ui_ctx, user);
    Ok(())
}
