use crate::args::UsersCommand;
use crate::context::CliContext;
use crate::types::OutputFormat;
use anyhow::Result;
use rolodex_client::api::DirectoryApi;
use rolodex_types::{UserDraft, UserId};

pub async fn handle(
    context: &CliContext,
    command: UsersCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        UsersCommand::List => {
            let users = context.api.list_users().await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&users)?),
                OutputFormat::Plain => {
                    for user in &users {
                        println!("{}\t{}\t{}", user.id, user.username, user.role);
                    }
                    println!("{} users", users.len());
                }
            }
            Ok(())
        }

        UsersCommand::Add {
            username,
            password,
            role,
        } => {
            let draft = UserDraft {
                username,
                password,
                role,
            };
            let id = context.api.create_user(&draft).await?;
            println!("created user {} ({})", draft.username, id);
            Ok(())
        }

        UsersCommand::Remove { id } => {
            context.api.delete_user(UserId(id)).await?;
            println!("deleted user {}", id);
            Ok(())
        }
    }
}
