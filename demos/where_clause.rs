//! Evaluates a WHERE clause over a small in-memory table

use rowfilter::access::{Header, Row};
use rowfilter::expression::{ClauseBuilder, Comparator, Condition};
use rowfilter::sql::parse_where;
use rowfilter::table::Table;

fn main() -> anyhow::Result<()> {
    let header = Header::new(["name", "age", "gender", "score", "company"])?;
    let rows: Vec<Row> = [
        ["John Doe", "20", "male", "110.5", "IBX"],
        ["Jenny Ho", "21", "female", "100", "Huawei"],
        ["Bill Gates", "61", "male", "101", "Microsoft"],
        ["Paul Allen", "64", "male", "102", "Microsoft"],
        ["Jane Doe", "32", "female", "199", "Microsoft"],
    ]
    .into_iter()
    .map(|fields| fields.into_iter().collect())
    .collect();
    let table = Table::new(header, rows)?;

    // Built condition by condition
    let clause = ClauseBuilder::new()
        .add_condition(Condition::text("name", Comparator::Ne, "Bill Gates"))?
        .and(Condition::integer("age", Comparator::Gt, 60))?
        .or(Condition::text("gender", Comparator::Eq, "female"))?
        .and(Condition::real("score", Comparator::Le, 100.0))?
        .or(Condition::text("company", Comparator::Eq, "IBX"))?
        .build()?;

    println!("WHERE {}", clause);
    println!("{}", table.header().columns().join("\t"));
    for row in table.filter(&clause)? {
        println!("{}", row.fields().join("\t"));
    }

    // The same clause from text
    let parsed = parse_where(&clause.to_string())?;
    assert_eq!(parsed, clause);

    println!("\nEvaluation traces:");
    for row in table.rows() {
        let trace = clause.trace(table.header(), row)?;
        println!("{:<12} {:<5} {:?}", row.fields()[0], trace.result, trace.visited);
    }

    Ok(())
}
