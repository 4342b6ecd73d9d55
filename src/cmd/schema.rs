//! Schema command - print expected input formats

use clap::Args;
use exchange1031::ExchangeInput;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the exchange input file
    JsonSchema,
    /// CSV header row for candidate properties
    CsvHeader,
    /// CSV column descriptions for candidate properties
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(ExchangeInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        let columns: Vec<_> = CSV_FIELDS.iter().map(|(name, _, _)| *name).collect();
        println!("{}", columns.join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("Candidate CSV Format");
        println!("====================");
        println!();
        for (name, required, description) in CSV_FIELDS {
            let req = if *required { "required" } else { "optional" };
            println!("{:16} ({:8})  {}", name, req, description);
        }
        println!();
        println!("Amounts are plain decimal dollars without separators (e.g. 505000.00)");
        Ok(())
    }
}

const CSV_FIELDS: &[(&str, bool, &str)] = &[
    ("id", true, "Unique identifier for the candidate"),
    ("address", true, "Street address"),
    ("asking_price", true, "Listed asking price"),
    (
        "estimated_value",
        true,
        "Estimated market value, used by the identification rules",
    ),
    ("notes", false, "Optional free-form notes"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use exchange1031::CandidateRecord;

    #[test]
    fn csv_fields_match_candidate_record() {
        let record = CandidateRecord {
            id: "a".to_string(),
            address: "1 Oak Ave".to_string(),
            asking_price: None,
            estimated_value: None,
            notes: None,
        };
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&record).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let header = out.lines().next().unwrap();
        let expected: Vec<_> = CSV_FIELDS.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(header, expected.join(","));
    }
}
