use clap::{Args, Parser, Subcommand};
use idcard::form::FormFields;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "idcard", bin_name = "idcard", version)]
#[command(about = "Employee identity cards: add, edit, list and print", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored employees with their positions
    #[command(alias = "ls")]
    List,

    /// Add an employee, or edit one with --index
    #[command(alias = "add")]
    Form(FormArgs),

    /// Show the printable card for an EC No
    #[command(alias = "show")]
    Card {
        /// EC No of the employee (exact match)
        ec_no: String,

        /// Print the resolved display model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seed the store if it is empty
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (slot, logo-green, logo-purple, seed-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Form fields. Dates are ISO (YYYY-MM-DD). In edit mode, fields left out
/// keep the stored value.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Position of the employee to edit; absent or invalid adds a new one
    #[arg(short, long)]
    pub index: Option<String>,

    #[arg(long)]
    pub ec_no: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// EC date as YYYY-MM-DD; stored as DD/Mon/YYYY
    #[arg(long)]
    pub ec_date: Option<String>,
    #[arg(long)]
    pub birth_date: Option<String>,
    #[arg(long)]
    pub passport_no: Option<String>,
    #[arg(long)]
    pub passport_issue_date: Option<String>,
    #[arg(long)]
    pub passport_expire_date: Option<String>,
    #[arg(long)]
    pub visa_no: Option<String>,
    #[arg(long)]
    pub visa_issue_date: Option<String>,
    #[arg(long)]
    pub visa_expire_date: Option<String>,
    #[arg(long)]
    pub referral_no: Option<String>,
    #[arg(long)]
    pub recruiting_agency: Option<String>,
    #[arg(long)]
    pub employer: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub bmet_no: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub blood_group: Option<String>,
    #[arg(long)]
    pub nid: Option<String>,
    #[arg(long)]
    pub passport_name: Option<String>,
    #[arg(long = "passport-no1")]
    pub passport_no1: Option<String>,

    /// Photo image file (cropped to 300x300)
    #[arg(long, value_name = "FILE")]
    pub photo: Option<PathBuf>,
    /// Left (purple) logo image file
    #[arg(long, value_name = "FILE")]
    pub logo_left: Option<PathBuf>,
    /// Right (green) logo image file
    #[arg(long, value_name = "FILE")]
    pub logo_right: Option<PathBuf>,
}

impl FormArgs {
    /// Copies every given flag onto the form fields.
    pub fn apply(&self, fields: &mut FormFields) {
        let pairs: [(&Option<String>, &mut String); 20] = [
            (&self.ec_no, &mut fields.ec_no),
            (&self.name, &mut fields.name),
            (&self.ec_date, &mut fields.ec_date),
            (&self.birth_date, &mut fields.birth_date),
            (&self.passport_no, &mut fields.passport_no),
            (&self.passport_issue_date, &mut fields.passport_issue_date),
            (&self.passport_expire_date, &mut fields.passport_expire_date),
            (&self.visa_no, &mut fields.visa_no),
            (&self.visa_issue_date, &mut fields.visa_issue_date),
            (&self.visa_expire_date, &mut fields.visa_expire_date),
            (&self.referral_no, &mut fields.referral_no),
            (&self.recruiting_agency, &mut fields.recruiting_agency),
            (&self.employer, &mut fields.employer),
            (&self.country, &mut fields.country),
            (&self.bmet_no, &mut fields.bmet_no),
            (&self.gender, &mut fields.gender),
            (&self.blood_group, &mut fields.blood_group),
            (&self.nid, &mut fields.nid),
            (&self.passport_name, &mut fields.passport_name),
            (&self.passport_no1, &mut fields.passport_no1),
        ];
        for (value, field) in pairs {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
    }
}
