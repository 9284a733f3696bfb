use crate::args::CompaniesCommand;
use crate::context::CliContext;
use crate::presentation::tree::TreeText;
use crate::types::OutputFormat;
use anyhow::{Context as _, Result};
use rolodex_client::api::DirectoryApi;
use rolodex_engine::list::{CompanyField, CompanySort, sort_companies};
use rolodex_engine::view::tree_for_company;
use rolodex_runtime::CompanyDirectory;
use rolodex_types::{CompanyDraft, CompanyId, CompanyRecord};

fn row_line(row: &CompanyRecord) -> String {
    let mut line = row.company_name.clone();
    if let Some(sub1) = row.sub1() {
        line.push_str(&format!(" / {}", sub1));
    }
    if let Some(sub2) = row.sub2() {
        line.push_str(&format!(" / {}", sub2));
    }
    line
}

pub async fn handle(
    context: &CliContext,
    command: CompaniesCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        CompaniesCommand::List { sort_by, direction } => {
            let mut directory = CompanyDirectory::new();
            directory.refresh(context.api.as_ref()).await?;

            let mut rows = directory.companies().to_vec();
            if let Some(field) = sort_by {
                let field: CompanyField = field
                    .parse()
                    .map_err(|err: String| anyhow::anyhow!(err))
                    .context("invalid --sort-by")?;
                sort_companies(
                    &mut rows,
                    CompanySort {
                        field,
                        direction: direction.into(),
                    },
                );
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Plain => {
                    for row in &rows {
                        println!("{}\t{}", row.id, row_line(row));
                    }
                    println!("{} companies", rows.len());
                }
            }
            Ok(())
        }

        CompaniesCommand::Tree { name } => {
            let mut directory = CompanyDirectory::new();
            directory.refresh(context.api.as_ref()).await?;

            match tree_for_company(directory.forest(), &name) {
                Some(tree) => match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
                    OutputFormat::Plain => print!("{}", TreeText::new(&tree)),
                },
                None => println!("no company data loaded"),
            }
            Ok(())
        }

        CompaniesCommand::Show { id } => {
            let row = context.api.get_company(CompanyId(id)).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&row)?),
                OutputFormat::Plain => println!("{}\t{}", row.id, row_line(&row)),
            }
            Ok(())
        }

        CompaniesCommand::Add { name, sub1, sub2 } => {
            let draft = CompanyDraft {
                company_name: name,
                sub_company1: sub1,
                sub_company2: sub2,
            };
            let id = context.api.create_company(&draft).await?;
            println!("created company {} ({})", draft.company_name, id);
            Ok(())
        }

        CompaniesCommand::Edit {
            id,
            name,
            sub1,
            sub2,
        } => {
            let id = CompanyId(id);
            let existing = context.api.get_company(id).await?;
            let draft = CompanyDraft {
                company_name: name.unwrap_or(existing.company_name),
                sub_company1: sub1.or(existing.sub_company1),
                sub_company2: sub2.or(existing.sub_company2),
            };
            context.api.update_company(id, &draft).await?;
            println!("updated company {}", id);
            Ok(())
        }

        CompaniesCommand::Remove { id } => {
            context.api.delete_company(CompanyId(id)).await?;
            println!("deleted company {}", id);
            Ok(())
        }
    }
}
