use mo_reader::CatalogReader;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-mo-file> [msgid ...]", args[0]);
        std::process::exit(1);
    }

    let mo_path = &args[1];
    let msgids = &args[2..];

    println!("Reading catalog: {}", mo_path);
    println!("{}", "=".repeat(60));

    let reader = match CatalogReader::from_path(mo_path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("\nERROR: Failed to read catalog");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    if let Some(header) = reader.header() {
        println!("\nCatalog Information:");
        println!("  Revision: {}", header.revision);
        println!("  Strings: {}", header.count);
        println!("  Originals table: {:#x}", header.originals_offset);
        println!("  Translations table: {:#x}", header.translations_offset);
        println!("  Hash table: {} slots at {:#x}", header.hash_size, header.hash_offset);
        println!("  Sorted: {}", reader.is_sorted());
    }

    if msgids.is_empty() {
        println!("\nSample Entries (first 10):");
        for (i, (original, translation)) in reader.iter().take(10).enumerate() {
            println!(
                "  {}. {:?} => {:?}",
                i + 1,
                String::from_utf8_lossy(original),
                String::from_utf8_lossy(translation)
            );
        }
        if reader.len() > 10 {
            println!("  ... and {} more", reader.len() - 10);
        }
        return;
    }

    println!("\nTranslations:");
    for msgid in msgids {
        let marker = if reader.index_of(msgid.as_bytes()).is_some() { " " } else { "?" };
        println!(
            " {} {:?} => {:?}",
            marker,
            msgid,
            String::from_utf8_lossy(reader.translate(msgid.as_bytes()))
        );
    }
}
