use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "device-cli")]
#[command(about = "Client for the fiscal device stub", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List simulated devices
    Devices,
    /// Check server health
    Health,
    /// Open or close the cash register shift
    Shift {
        #[arg(value_enum)]
        action: ShiftAction,
    },
    /// Show cash register shift totals
    ShiftTotals,
    /// Print a fiscal receipt
    Receipt {
        /// Receipt total
        #[arg(long)]
        sum: f64,
        /// Operation type (sell, refund, ...)
        #[arg(long = "type", default_value = "sell")]
        operation: String,
        /// Item names; a single "Товар" line is used when omitted
        #[arg(long = "item")]
        items: Vec<String>,
    },
    /// Print a non-fiscal document
    NonFiscal {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Take a card payment on the POS terminal
    Pay { amount: f64 },
    /// Refund a POS transaction
    Refund { amount: f64, transaction: String },
    /// Generate an X or Z report
    Report {
        #[arg(value_enum)]
        kind: ReportKind,
        #[arg(long, value_enum, default_value = "pos")]
        device: DeviceArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShiftAction {
    Open,
    Close,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportKind {
    X,
    Z,
}

#[derive(Clone, Copy, ValueEnum)]
enum DeviceArg {
    Pos,
    CashRegister,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Devices => client.get(format!("{base}/devices")),
        Commands::Health => client.get(format!("{base}/healthz")),
        Commands::Shift { action } => client
            .put(format!("{base}/devices/cash-register/work-shift"))
            .json(&json!({ "isActive": matches!(action, ShiftAction::Open) })),
        Commands::ShiftTotals => client.get(format!("{base}/devices/cash-register/shift-totals")),
        Commands::Receipt {
            sum,
            operation,
            items,
        } => {
            let items: Vec<Value> = if items.is_empty() {
                vec![json!({ "name": "Товар", "price": sum, "quantity": 1 })]
            } else {
                items.into_iter().map(|name| json!({ "name": name })).collect()
            };
            client
                .post(format!("{base}/devices/cash-register/receipts"))
                .json(&json!({ "items": items, "payment": { "sum": sum }, "type": operation }))
        }
        Commands::NonFiscal { lines } => client
            .post(format!("{base}/devices/cash-register/non-fiscals"))
            .json(&lines),
        Commands::Pay { amount } => client
            .post(format!("{base}/devices/pos/payments"))
            .json(&json!({ "amount": amount })),
        Commands::Refund {
            amount,
            transaction,
        } => client
            .post(format!("{base}/devices/pos/refunds"))
            .json(&json!({ "amount": amount, "transactionNumber": transaction })),
        Commands::Report { kind, device } => {
            let path = match (kind, device) {
                (ReportKind::X, DeviceArg::Pos) => "devices/pos/reports/x",
                (ReportKind::Z, DeviceArg::Pos) => "devices/pos/reports/z",
                (ReportKind::X, DeviceArg::CashRegister) => "devices/cash-register/reports/x",
                (ReportKind::Z, DeviceArg::CashRegister) => {
                    return Err("cash registers only produce X-reports".into());
                }
            };
            client.post(format!("{base}/{path}"))
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: device stub returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
