use avroform::AvroForm;
use serde_json::json;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let schema = json!({
        "type": "record",
        "name": "Order",
        "fields": [
            { "name": "id", "type": "string" },
            { "name": "placed_at", "type": "long" },
            { "name": "coupon", "type": ["string", "null"] },
            {
                "name": "status",
                "type": { "type": "enum", "symbols": ["PENDING", "SHIPPED", "CANCELLED"] }
            },
            {
                "name": "lines",
                "type": {
                    "type": "array",
                    "items": {
                        "type": "record",
                        "name": "OrderLine",
                        "fields": [
                            { "name": "sku", "type": "string" },
                            { "name": "quantity", "type": "int" },
                            { "name": "price", "type": "double" }
                        ]
                    }
                }
            },
            {
                "name": "attributes",
                "type": { "type": "map", "keys": "string", "values": ["string", "null"] }
            }
        ]
    });

    let value = AvroForm::from_schema(&schema)?
        .with_title("avroform demo")
        .run()?;

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
