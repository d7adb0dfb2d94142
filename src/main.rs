use anyhow::Result;

use pagesim::{Policy, simulate};

fn main() -> Result<()> {
    // Textbook reference string over pages 0..5
    let reference_string = [0, 1, 2, 3, 0, 1, 4, 0, 1, 2, 3, 4];
    let page_count = 5;

    println!("Reference string: {:?}", reference_string);
    for frames in 1..=page_count {
        let mut counts = Vec::with_capacity(Policy::ALL.len());
        for policy in Policy::ALL {
            let faults = simulate(policy, page_count, &reference_string, frames)?;
            counts.push(format!("{}={}", policy, faults));
        }
        println!("{} frames: {}", frames, counts.join(", "));
    }

    Ok(())
}
