fn main() {
    println!("LINKSTAMP Extraction Demo");
    println!("=========================");

    // Classify a spread of URL shapes
    println!("\n1. URL classification:");
    let sample_urls = vec![
        "https://www.linkedin.com/posts/johndoe_7223467890123456789_sample-post",
        "https://www.linkedin.com/feed/update/urn:li:activity:7223467890123456789/",
        "https://www.linkedin.com/pulse/headline_7223467890123456789/",
        "https://www.linkedin.com/in/johndoe/",
        "https://www.linkedin.com/company/acme/",
        "https://example.com/page",
    ];

    for url in &sample_urls {
        let analysis = linkstamp::analyze_url(url);
        print!("  {} → {}", url, analysis.kind);
        match analysis.reason {
            Some(reason) => println!(" ({})", reason),
            None => println!(),
        }
    }

    // Full pipeline extraction
    println!("\n2. Timestamp extraction:");
    for url in &sample_urls {
        println!("  {}", url);
        match linkstamp::extract_timestamp_from_url(url) {
            Some(result) => {
                println!("    unix:     {}", result.unix);
                println!("    iso:      {}", result.iso);
                println!("    local:    {}", result.local);
                println!("    relative: {}", result.relative);
            }
            None => println!("    ✗ No timestamp recoverable"),
        }
    }

    // Identifier-level building blocks
    println!("\n3. Building blocks:");
    let comment_url = "https://www.linkedin.com/feed/update/urn:li:activity:7223467890123456789?commentUrn=urn%3Ali%3Acomment%3A(6962544640000000000%2C7223467890123456789)";
    println!("  {}", comment_url);
    match linkstamp::extract_comment_id(comment_url) {
        Some(id) => println!("    comment id: {} ✓ (wins over post id)", id),
        None => println!("    ✗ no comment id"),
    }
    match linkstamp::extract_post_id(comment_url) {
        Some(id) => println!("    post id:    {}", id),
        None => println!("    ✗ no post id"),
    }

    // Decode window rejections
    println!("\n4. Decode window:");
    let boundary_ids = vec![
        ("7223467890123456789", "valid, mid-2024"),
        ("123456789012345", "15 digits, decodes below the 2002 floor"),
        ("9223372036854775807", "i64::MAX, decodes past the future allowance"),
    ];
    for (id, note) in boundary_ids {
        match linkstamp::decode_timestamp(id) {
            Some(millis) => println!("  {} ({}) → {} ms ✓", id, note, millis),
            None => println!("  {} ({}) → rejected ✓", id, note),
        }
    }

    // Demo card
    println!("\n5. Demo result:");
    let demo = linkstamp::demo_result();
    println!("  unix:     {}", demo.unix);
    println!("  iso:      {}", demo.iso);
    println!("  local:    {}", demo.local);
    println!("  relative: {}", demo.relative);
}
