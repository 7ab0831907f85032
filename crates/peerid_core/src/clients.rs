//! Known client codes.
//!
//! Sourced from the peer id conventions list at <https://wiki.theory.org/BitTorrentSpecification#peer_id>.

/// Look up an Azureus style two character client code, e.g. `b"AZ"`.
pub fn azureus_client_name(code: &[u8]) -> Option<&'static str> {
    let name = match code {
        b"7T" => "aTorrent for Android",
        b"AB" => "AnyEvent::BitTorrent",
        b"AG" | b"A~" => "Ares",
        b"AR" => "Arctic",
        b"AT" => "Artemis",
        b"AV" => "Avicora",
        b"AX" => "BitPump",
        b"AZ" => "Azureus",
        b"BB" => "BitBuddy",
        b"BC" => "BitComet",
        b"BE" => "Baretorrent",
        b"BF" => "Bitflu",
        b"BG" => "BTG",
        b"BL" => "BitCometLite",
        b"BP" => "BitTorrent Pro",
        b"BR" => "BitRocket",
        b"BS" => "BTSlave",
        b"BT" => "BitTorrent",
        b"Bt" => "Bt",
        b"BW" => "BitWombat",
        b"BX" => "Bittorrent X",
        b"CD" => "Enhanced CTorrent",
        b"CT" => "CTorrent",
        b"DE" => "Deluge",
        b"DP" => "Propagate Data Client",
        b"EB" => "EBit",
        b"ES" => "electric sheep",
        b"FC" => "FileCroc",
        b"FD" => "Free Download Manager",
        b"FT" => "FoxTorrent",
        b"FW" => "FrostWire",
        b"FX" => "Freebox BitTorrent",
        b"GS" => "GSTorrent",
        b"HK" => "Hekate",
        b"HL" => "Halite",
        b"HM" => "hMule",
        b"HN" => "Hydranode",
        b"IL" => "iLivid",
        b"JS" => "Justseed.it client",
        b"JT" => "JavaTorrent",
        b"KG" => "KGet",
        b"KT" => "KTorrent",
        b"LC" => "LeechCraft",
        b"LH" => "LH-ABC",
        b"LP" => "Lphant",
        b"LT" | b"lt" => "libtorrent",
        b"LW" => "LimeWire",
        b"MK" => "Meerkat",
        b"MO" => "MonoTorrent",
        b"MP" => "MooPolice",
        b"MR" => "Miro",
        b"MT" => "MoonlightTorrent",
        b"NB" => "Net::BitTorrent",
        b"NX" => "Net Transport",
        b"OS" => "OneSwarm",
        b"OT" => "OmegaTorrent",
        b"PB" => "Protocol::BitTorrent",
        b"PD" => "Pando",
        b"PI" => "PicoTorrent",
        b"PT" => "PHPTracker",
        b"qB" => "qBittorrent",
        b"QD" => "QQDownload",
        b"QT" => "Qt 4 Torrent example",
        b"rQ" => "rqbit",
        b"RT" => "Retriever",
        b"RZ" => "RezTorrent",
        b"S~" => "Shareaza alpha/beta",
        b"SB" => "Swiftbit",
        b"SD" => "Thunder",
        b"SM" => "SoMud",
        b"SP" => "BitSpirit",
        b"SS" => "SwarmScope",
        b"ST" => "SymTorrent",
        b"st" => "sharktorrent",
        b"SZ" => "Shareaza",
        b"TB" => "Torch",
        b"TE" => "terasaur Seed Bank",
        b"TL" => "Tribler",
        b"TN" => "TorrentDotNET",
        b"TR" => "Transmission",
        b"TS" => "Torrentstorm",
        b"TT" => "TuoTu",
        b"UL" => "uLeecher!",
        b"UM" => "µTorrent for Mac",
        b"UT" => "µTorrent",
        b"VG" => "Vagaa",
        b"WD" => "WebTorrent Desktop",
        b"WT" => "BitLet",
        b"WW" => "WebTorrent",
        b"WY" => "FireTorrent",
        b"XF" => "Xfplay",
        b"XL" => "Xunlei",
        b"XS" => "XSwifter",
        b"XT" => "XanTorrent",
        b"XX" => "Xtorrent",
        b"ZT" => "ZipTorrent",
        _ => return None,
    };
    Some(name)
}

/// Look up a Shadow style single character client code, e.g. `b"S"`.
pub fn shadow_client_name(code: &[u8]) -> Option<&'static str> {
    let name = match code {
        b"A" => "ABC",
        b"O" => "Osprey Permaseed",
        b"Q" => "BTQueue",
        b"R" => "Tribler",
        b"S" => "Shadow's client",
        b"T" => "BitTornado",
        b"U" => "UPnP NAT Bit Torrent",
        _ => return None,
    };
    Some(name)
}
