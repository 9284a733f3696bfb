use crate::args::ContactsCommand;
use crate::context::CliContext;
use crate::presentation::table::TableText;
use crate::presentation::tree::TreeText;
use crate::types::{Direction, OutputFormat};
use anyhow::{Context as _, Result, bail};
use rolodex_client::api::DirectoryApi;
use rolodex_client::spreadsheet;
use rolodex_engine::view::table_view;
use rolodex_runtime::{
    ColumnPrefs, CompanyDirectory, FetchOutcome, ListController, delete_contacts,
};
use rolodex_types::{ALL_COLUMNS, ColumnKey, ContactDraft, ContactId, ContactSort};

fn parse_sort(sort_by: Option<String>, direction: Direction) -> Result<Option<ContactSort>> {
    let Some(column) = sort_by else {
        return Ok(None);
    };
    let column: ColumnKey = column
        .parse()
        .map_err(|err: String| anyhow::anyhow!(err))
        .context("invalid --sort-by")?;
    Ok(Some(ContactSort {
        column,
        direction: direction.into(),
    }))
}

pub async fn handle(
    context: &CliContext,
    command: ContactsCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ContactsCommand::Search {
            term,
            sort_by,
            direction,
            pages,
        } => {
            let sort = parse_sort(sort_by, direction)?;
            let mut controller = ListController::new(context.api.clone());
            controller.start_query(&term, sort).await?;
            for _ in 1..pages {
                if controller.fetch_next_page().await? == FetchOutcome::Idle {
                    break;
                }
            }

            let prefs = ColumnPrefs::load(&context.data_dir);
            let view = table_view(controller.items(), prefs.visibility());
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Plain => {
                    print!("{}", TableText::new(&view));
                    let more = if controller.state().has_more() {
                        " (more available)"
                    } else {
                        ""
                    };
                    println!("{} contacts loaded{}", controller.items().len(), more);
                }
            }
            Ok(())
        }

        ContactsCommand::Suggest { term } => {
            let controller = ListController::new(context.api.clone());
            let suggestions = controller.suggest(&term).await?;
            for contact in &suggestions {
                let company = contact.main_company();
                if company.is_empty() {
                    println!("{}", contact.full_name);
                } else {
                    println!("{} ({})", contact.full_name, company);
                }
            }
            Ok(())
        }

        ContactsCommand::Show { id } => {
            let contact = context.api.get_contact(ContactId(id)).await?;

            for key in ALL_COLUMNS {
                let value = contact.field(key);
                if !value.is_empty() {
                    println!("{}: {}", key.label(), value);
                }
            }

            let mut directory = CompanyDirectory::new();
            directory.refresh(context.api.as_ref()).await?;
            if let Some(tree) = directory.tree_for(&contact) {
                println!();
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
                    OutputFormat::Plain => print!("{}", TreeText::new(&tree)),
                }
            }
            Ok(())
        }

        ContactsCommand::Add {
            full_name,
            company,
            job_title,
            mobile,
            email,
        } => {
            let draft = ContactDraft {
                full_name,
                main_company: company,
                job_title,
                mobile_phone: mobile,
                email,
                ..Default::default()
            };
            let id = context.api.create_contact(&draft).await?;
            println!("created contact {} ({})", draft.full_name, id);
            Ok(())
        }

        ContactsCommand::Edit {
            id,
            full_name,
            company,
            job_title,
            mobile,
            email,
        } => {
            let id = ContactId(id);
            let contact = context.api.get_contact(id).await?;

            let mut draft = ContactDraft::from(&contact);
            if let Some(full_name) = full_name {
                draft.full_name = full_name;
            }
            if let Some(company) = company {
                draft.main_company = Some(company);
            }
            if let Some(job_title) = job_title {
                draft.job_title = Some(job_title);
            }
            if let Some(mobile) = mobile {
                draft.mobile_phone = Some(mobile);
            }
            if let Some(email) = email {
                draft.email = Some(email);
            }

            context.api.update_contact(id, &draft).await?;
            println!("updated contact {}", id);
            Ok(())
        }

        ContactsCommand::Delete { ids, yes } => {
            if !yes {
                bail!(
                    "refusing to delete {} contact(s) without --yes",
                    ids.len()
                );
            }

            let ids: Vec<ContactId> = ids.into_iter().map(ContactId).collect();
            let report = delete_contacts(context.api.as_ref(), &ids).await;

            println!(
                "deleted {} of {} contact(s)",
                report.deleted, report.requested
            );
            for (id, message) in &report.failed {
                eprintln!("contact {}: {}", id, message);
            }
            Ok(())
        }

        ContactsCommand::Export {
            output,
            term,
            sort_by,
            direction,
        } => {
            let sort = parse_sort(sort_by, direction)?;
            let contacts = context.api.search_all(&term, sort).await?;
            if contacts.is_empty() {
                bail!("no contacts matched; nothing to export");
            }
            spreadsheet::export_to_file(&output, &contacts)?;
            println!("exported {} contact(s) to {}", contacts.len(), output.display());
            Ok(())
        }

        ContactsCommand::Import { file } => {
            // Header validation happens locally; a malformed file is
            // rejected before any upload.
            let bytes = spreadsheet::prepare_import(&file)?;
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "import.csv".to_string());

            let summary = context.api.import_contacts(&file_name, bytes).await?;
            println!(
                "imported: {}, updated: {}, skipped: {}",
                summary.imported_count, summary.updated_count, summary.skipped_count
            );
            for error in &summary.errors {
                eprintln!("{}", error);
            }
            Ok(())
        }
    }
}
