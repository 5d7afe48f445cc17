use respwire::RespEncoder;
use respwire::RespValue;

fn main() {
	println!("--- RESP Buffer Decode Example ---");

	// A read buffer holding a reply, a pushed request and a null, back to back
	let mut buffer = Vec::new();
	buffer.extend_from_slice(&RespValue::simple_string("OK").encode());
	buffer.extend_from_slice(&RespValue::command(["SET", "key", "value"]).encode());
	buffer.extend_from_slice(&RespValue::null_bulk_string().encode());

	let mut offset = 0;
	while offset < buffer.len() {
		match respwire::decode(&buffer[offset..]) {
			Ok((value, consumed)) => {
				println!(
					"[Decoder] {} at offset {} ({} bytes): {:?}",
					value.kind(),
					offset,
					consumed,
					value
				);
				offset += consumed;
			}
			Err(e) => {
				eprintln!("[Decoder] Error at offset {}: {}", offset, e);
				break;
			}
		}
	}
}
