//! employees-client CLI entry point.

use clap::Parser;
use employees_client::cli::employees::EmployeesAction;
use employees_client::cli::health::HealthAction;
use employees_client::cli::{Cli, Commands};
use employees_client::client::EmployeesClient;
use employees_client::output::{pretty, render};
use employees_core::employee::EmployeeRecord;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = EmployeesClient::new(&cli.base_url);

    match cli.command {
        Commands::Employees(employees_cmd) => match employees_cmd.action {
            EmployeesAction::List => {
                let employees = client.list_employees().await?;
                println!(
                    "{}",
                    render(employees.as_slice(), cli.format, pretty::format_employees)
                );
            }
            EmployeesAction::Get { ssn } => {
                let employee = client.get_employee(ssn).await?;
                println!("{}", render(&employee, cli.format, pretty::format_employee));
            }
            EmployeesAction::Create(fields) => {
                let record = EmployeeRecord::from(fields);
                let response = client.create_employee(&record).await?;
                if !cli.quiet {
                    println!("{}", render(&response, cli.format, pretty::format_mutation));
                }
            }
            EmployeesAction::Update { ssn, fields } => {
                let record = EmployeeRecord::from(fields);
                let response = client.update_employee(ssn, &record).await?;
                if !cli.quiet {
                    println!("{}", render(&response, cli.format, pretty::format_mutation));
                }
            }
            EmployeesAction::Delete { ssn } => {
                let response = client.delete_employee(ssn).await?;
                if !cli.quiet {
                    println!("{}", render(&response, cli.format, pretty::format_mutation));
                }
            }
            EmployeesAction::Search(args) => {
                let employees = client.search_employees(&args.into()).await?;
                println!(
                    "{}",
                    render(employees.as_slice(), cli.format, pretty::format_employees)
                );
            }
        },
        Commands::Health(health_cmd) => match health_cmd.action {
            HealthAction::Live => {
                let live = client.health_live().await?;
                println!("Live: {}", if live { "yes" } else { "no" });
                if !live {
                    std::process::exit(1);
                }
            }
            HealthAction::Ready => {
                let status = client.health_ready().await?;
                println!(
                    "{}",
                    render(&status, cli.format, |s| match &s.error {
                        Some(error) => format!("Ready: no\n  Error: {error}"),
                        None => format!("Ready: {}", if s.healthy { "yes" } else { "no" }),
                    })
                );
                if !status.healthy {
                    std::process::exit(1);
                }
            }
        },
    }

    Ok(())
}
