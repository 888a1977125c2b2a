use iced_x86::{Decoder, DecoderOptions, Formatter, Instruction, IntelFormatter};

/// Renders x86-64 machine code as Intel syntax, one instruction per line.
pub fn disassemble(code: &[u8]) -> String {
    let mut decoder = Decoder::new(64, code, DecoderOptions::NONE);
    decoder.set_ip(0x1000);

    let mut formatter = IntelFormatter::new();

    let mut instruction = Instruction::default();
    let mut output = String::new();
    let mut listing = String::new();
    while decoder.can_decode() {
        output.clear();
        decoder.decode_out(&mut instruction);
        formatter.format(&instruction, &mut output);
        listing.push_str(&format!("  {:02x}  {}\n", instruction.ip(), output));
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_add() {
        // mov eax,edi / add eax,esi / ret
        let listing = disassemble(&[0x89, 0xf8, 0x01, 0xf0, 0xc3]);
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("mov eax,edi"));
        assert!(lines[1].contains("add eax,esi"));
        assert!(lines[2].contains("ret"));
    }
}
