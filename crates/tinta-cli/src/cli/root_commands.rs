use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Estimate how much paint a set of walls needs.
    Estimate(EstimateArgs),
    /// Show the coverage table (m² per liter).
    Coverage,
    /// Print the WhatsApp contact link.
    Contact(ContactArgs),
    /// Print the JSON Schema of a command response.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EstimateArgs {
    /// Wall width in meters.
    #[arg(long, allow_hyphen_values = true)]
    pub width: String,
    /// Wall height in meters.
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,
    /// Number of walls (defaults to config `defaults.walls`).
    #[arg(long, allow_hyphen_values = true)]
    pub walls: Option<String>,
    /// Number of coats (defaults to config `defaults.coats`).
    #[arg(long, allow_hyphen_values = true)]
    pub coats: Option<String>,
    /// Paint quality: basic, medium, premium.
    #[arg(long)]
    pub quality: Option<String>,
    /// Surface finish: smooth, textured, rough.
    #[arg(long)]
    pub surface: Option<String>,
    /// Fail on unknown quality or surface instead of using the default rate.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    /// Phone number (overrides config `contact.phone`).
    #[arg(long)]
    pub phone: Option<String>,
    /// Pre-filled message (overrides config `contact.message`).
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Response type: estimate, coverage, contact.
    pub type_name: String,
}
