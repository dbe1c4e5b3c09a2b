//! Pattern 7: Proxy
//! Example: An auditing stand-in forwarding to the real document
//!
//! Run with: cargo run --example p7_proxy

use structural_patterns::proxy::{AuditProxy, Document, ReportDocument};

fn main() {
    println!("=== Proxy Demo ===\n");

    let report = ReportDocument::new("Q3 revenue");
    let proxy = AuditProxy::new(Box::new(report), "alice");

    // The caller sees only the Document trait.
    for line in proxy.read() {
        println!("{line}");
    }

    println!("\n=== Stacked Proxies ===");
    let gateway = AuditProxy::new(Box::new(proxy), "gateway");
    for line in gateway.read() {
        println!("{line}");
    }
}
