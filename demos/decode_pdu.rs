// ABOUTME: Command line tool that decodes a hex-encoded SMPP PDU and prints its fields
// ABOUTME: For submit_sm and deliver_sm it also prints the decoded message text

use argh::FromArgs;
use smpp_decode::{Body, DeliveryReceipt, TextDecoder, UnknownCodingPolicy, parse};
use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Decode one SMPP v3.4 PDU given as hex (whitespace is ignored)
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debugging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// decode unknown data codings octet for octet instead of failing
    #[argh(switch)]
    pass_through: bool,

    /// the PDU bytes in hex
    #[argh(positional)]
    hex: Vec<String>,
}

fn parse_hex(input: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let digits: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("odd number of hex digits".into());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let byte: String = pair.iter().collect();
            u8::from_str_radix(&byte, 16).map_err(|e| format!("bad hex '{byte}': {e}").into())
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.debugging {
        Level::TRACE
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let policy = if cli_args.pass_through {
        UnknownCodingPolicy::PassThrough
    } else {
        UnknownCodingPolicy::Reject
    };
    let decoder = TextDecoder::builder().unknown_coding(policy).build();

    let raw = parse_hex(&cli_args.hex.join(""))?;
    let pdu = parse(&raw)?;

    println!("command_id:      {:?}", pdu.header.command_id);
    println!("command_status:  {:#010x}", pdu.header.command_status);
    println!("sequence_number: {}", pdu.header.sequence_number);

    match &pdu.body {
        Body::SubmitSm(body) | Body::DeliverSm(body) => {
            println!("source:          {} ({:?}/{:?})", body.source.addr, body.source.ton, body.source.npi);
            println!("destination:     {} ({:?}/{:?})", body.destination.addr, body.destination.ton, body.destination.npi);
            println!("esm_class:       {:?}", body.esm_class);
            println!("data_coding:     {}", body.data_coding);
            println!("payload:         {:?}", body.payload_span());
            println!("text:            {}", body.decode_text(&decoder)?);

            if let Some(receipt) = DeliveryReceipt::from_body(body, &decoder)? {
                println!("receipt:         {receipt:?}");
            }
        }
        Body::Bind(bind) => {
            println!("system_id:       {}", bind.system_id);
            println!("interface:       {:#04x}", bind.interface_version);
        }
        other => println!("body:            {other:?}"),
    }

    Ok(())
}
