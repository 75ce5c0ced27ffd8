// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use validation_utils::prelude::*;

fn main() {
    // Rejections are logged at debug level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Email Validation ===\n");

    let candidates = [
        "  Ada.Lovelace@Example.COM ",
        "user@xn--and-6ma2c.com.ar",
        "user@ñandú.com.ar",
        "user@localhost",
        "user..name@host.com",
        "\"Fred Bloggs\"@example.com",
        "   ",
    ];

    for raw in candidates {
        match validate_email_address(raw) {
            Ok(email) => println!(
                "  ok    {:?} -> {} (local={}, domain={}, punycode={})",
                raw,
                email,
                email.local_part(),
                email.domain(),
                email.has_punycode_domain()
            ),
            Err(err) => println!("  error {:?}: {}", raw, err),
        }
    }

    println!("\n=== Decimal Helpers ===\n");

    let amount = Decimal::new(150, 2);
    println!("  scale_amount(1.50)        = {:?}", scale_amount(amount));
    println!(
        "  scale_amount(1.005)       = {:?}",
        scale_amount(Decimal::new(1005, 3))
    );
    println!(
        "  round_percentage(0.123449) = {}",
        round_percentage(Decimal::new(123449, 6))
    );
    println!(
        "  safe_divide(10, 0, 2)     = {:?}",
        safe_divide(Decimal::TEN, Decimal::ZERO, 2)
    );
    println!(
        "  safe_divide(10, 3, 2)     = {:?}",
        safe_divide(Decimal::TEN, Decimal::from(3), 2)
    );
    println!(
        "  positive_or_zero(-4.2)    = {}",
        positive_or_zero(Decimal::new(-42, 1))
    );
    println!("  null_to_zero(None)        = {}", null_to_zero(None));

    println!("\n=== String Helpers ===\n");

    println!("  blank_to_none(\"  \")       = {:?}", blank_to_none("  "));
    println!("  blank_to_none(\"abc\")      = {:?}", blank_to_none("abc"));
    println!(
        "  require_non_blank(\"\")     = {:?}",
        require_non_blank("", Some("customer name is required"))
    );
}
