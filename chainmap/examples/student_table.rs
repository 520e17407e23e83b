use chainmap::logger::initialize_logger;
use chainmap::{ChainMapError, FixedBucketHashMap, StudentId};
use log::info;

fn main() -> Result<(), ChainMapError> {
    initialize_logger();

    let mut table = FixedBucketHashMap::default();
    let students = [
        ("Rusty Dillard", "9000000001", 21, 3.92),
        ("Brigitte Smith", "9000000002", 19, 3.10),
        ("Fei-hung Huang", "9000000098", 24, 2.75),
        ("Samara Patel", "9412500876", 33, 3.55),
        ("Maverick Quinn", "9876543210", 18, 4.00),
    ];

    for (name, id, age, gpa) in students {
        let record = table.record(name, StudentId::parse(id)?, age, gpa)?;
        info!("{} goes to bucket {}", record.id(), record.bucket());
        table.put(record)?;
    }

    println!("{table}");

    for query in ["9412500876", "9000000003", "12345"] {
        match table.lookup(query) {
            Ok(Some(record)) => println!("found:     {record}"),
            Ok(None) => println!("not found: {query}"),
            Err(e) => println!("rejected:  {e}"),
        }
    }

    Ok(())
}
