//! Protocol probe catalog for UDP service detection.
//!
//! A static table mapping well-known UDP ports to protocol-specific probe
//! payloads, based on the IANA registry and the Nmap payload database. The
//! byte contents are domain data, not logic: the scanner only relies on the
//! lookup contract (table order, first match wins, unknown ports degrade to
//! an empty probe).
//!
//! The table is loaded once as a `const` slice and never mutated.

/// One probe: a payload to elicit a response from a specific service.
#[derive(Debug, Clone, Copy)]
pub struct ProbeEntry {
    /// Well-known port this probe targets.
    pub port: u16,
    /// Human-readable service label.
    pub service: &'static str,
    /// Probe payload bytes. May be empty for services with no safe probe.
    pub payload: &'static [u8],
    /// RFC or protocol reference for the payload.
    pub reference: &'static str,
}

/// Empty payload for ports with no defined probe.
pub const EMPTY_PROBE: &[u8] = b"";

// Echo - RFC 862
const ECHO_PROBE: &[u8] = b"\r\n\r\n";

// DNS status request - RFC 1035
const DNS_STATUS_PROBE: &[u8] = b"\x00\x00\x10\x00\x00\x00\x00\x00\x00\x00\x00\x00";

// DNS version.bind TXT CHAOS query - RFC 1035
const DNS_VERSION_PROBE: &[u8] =
    b"\x00\x00\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x07version\x04bind\x00\x00\x10\x00\x03";

// TFTP read request - RFC 1350
const TFTP_PROBE: &[u8] = b"\x00\x01netascii\x00octet\x00";

// RPC portmapper NULL call - RFC 1831
const RPC_PROBE: &[u8] = &[
    0x72, 0xfe, 0x1d, 0x13, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x86, 0xa0, //
    0x00, 0x01, 0x97, 0x7c, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// NTP client request - RFC 5905
const NTP_PROBE: &[u8] = &[
    0xe3, 0x00, 0x04, 0xfa, 0x00, 0x01, 0x00, 0x00, //
    0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0xc5, 0x4f, 0x23, 0x4b, 0x71, 0xb1, 0x52, 0xf3,
];

// SNMPv1 GetRequest, community "public" - RFC 1157
const SNMP_V1_PROBE: &[u8] = b"\x30\x26\x02\x01\x00\x04\x06public\xa0\x19\x02\x04\x00\x00\x00\x01\x02\x01\x00\x02\x01\x00\x30\x0b\x30\x09\x06\x05\x2b\x06\x01\x02\x01\x05\x00";

// NetBIOS name service wildcard query - RFC 1002
const NETBIOS_PROBE: &[u8] = b"\x80\xf0\x00\x10\x00\x01\x00\x00\x00\x00\x00\x00\x20CKAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\x00\x00\x21\x00\x01";

// DHCP Discover - RFC 2131
const DHCP_PROBE: &[u8] = &[
    0x01, 0x01, 0x06, 0x00, 0x01, 0x23, 0x45, 0x67, //
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0e, 0x35, 0xd4, //
    0xd8, 0x51, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x63, 0x82, 0x53, 0x63, 0x35, 0x01, 0x08, 0xff,
];

// XDMCP query - X Display Manager
const XDMCP_PROBE: &[u8] = b"\x00\x01\x00\x02\x00\x01\x00";

// Connectionless LDAP search - RFC 1798
const CLDAP_PROBE: &[u8] = b"\x30\x84\x00\x00\x00\x2d\x02\x01\x07\x63\x84\x00\x00\x00\x24\x04\x00\x0a\x01\x00\x0a\x01\x00\x02\x01\x00\x02\x01\x64\x01\x01\x00\x87\x0bobjectClass\x30\x84\x00\x00\x00\x00";

// SLP service request - RFC 2608
const SLP_PROBE: &[u8] = b"\x02\x01\x00\x00\x36\x20\x00\x00\x00\x00\x00\x01\x00\x02en\x00\x00\x00\x15service:service-agent\x00\x07default\x00\x00\x00\x00";

// DTLS client hello - RFC 6347
const DTLS_PROBE: &[u8] = &[
    0x16, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x36, 0x01, 0x00, 0x00, //
    0x2a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x2a, 0xfe, 0xfd, 0x00, 0x00, 0x00, 0x00, 0x7c, //
    0x77, 0x40, 0x1e, 0x8a, 0xc8, 0x22, 0xa0, 0xa0, //
    0x18, 0xff, 0x93, 0x08, 0xca, 0xac, 0x0a, 0x64, //
    0x2f, 0xc9, 0x22, 0x64, 0xbc, 0x08, 0xa8, 0x16, //
    0x89, 0x19, 0x3f, 0x00, 0x00, 0x00, 0x02, 0x00, //
    0x2f, 0x01, 0x00,
];

// IKE phase 1 main mode - RFC 2409
const IKE_PROBE: &[u8] = &[
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x01, 0x10, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0xa4, //
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, //
    0x00, 0x00, 0x00, 0x98, 0x01, 0x01, 0x00, 0x04, //
    0x03, 0x00, 0x00, 0x24, 0x01, 0x01, 0x00, 0x00, //
    0x80, 0x01, 0x00, 0x05, 0x80, 0x02, 0x00, 0x02, //
    0x80, 0x03, 0x00, 0x01, 0x80, 0x04, 0x00, 0x02, //
    0x80, 0x0b, 0x00, 0x01, 0x00, 0x0c, 0x00, 0x04, //
    0x00, 0x00, 0x0e, 0x10,
];

// RIP request for full table - RFC 2453
const RIP_PROBE: &[u8] = &[
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

// RMCP/IPMI presence ping - IPMI v2.0
const IPMI_PROBE: &[u8] = b"\x06\x00\xff\x06\x00\x00\x11\xbe\x80\x00\x00\x00";

// OpenVPN control packet
const OPENVPN_PROBE: &[u8] = b"\x38\x01\x02\x03\x04\x05\x06\x07\x08\x00\x00\x00\x00";

// Citrix MetaFrame browse - Citrix ICA
const CITRIX_PROBE: &[u8] = &[
    0x1e, 0x00, 0x01, 0x30, 0x02, 0xfd, 0xa8, 0xe3, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// RADIUS Access-Request - RFC 2865
const RADIUS_PROBE: &[u8] = &[
    0x01, 0x00, 0x00, 0x14, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00,
];

// L2TP ICRQ - RFC 2661
const L2TP_PROBE: &[u8] = &[
    0xc8, 0x02, 0x00, 0x3c, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x80, 0x08, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x01, 0x80, 0x08, 0x00, 0x00, //
    0x00, 0x02, 0x01, 0x00, 0x80, 0x0e, 0x00, 0x00, //
    0x00, 0x07, b'n', b'x', b'p', b'-', b's', b'c', //
    b'a', b'n', 0x80, 0x0a, 0x00, 0x00, 0x00, 0x03, //
    0x00, 0x00, 0x00, 0x03, 0x80, 0x08, 0x00, 0x00, //
    0x00, 0x09, 0x00, 0x00,
];

// SSDP/UPnP M-SEARCH
const SSDP_PROBE: &[u8] = b"M-SEARCH * HTTP/1.1\r\nHost: 239.255.255.250:1900\r\nMan: \"ssdp:discover\"\r\nMX: 5\r\nST: ssdp:all\r\n\r\n";

// NFS NULL call - RFC 1831/1094
const NFS_PROBE: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x86, 0xa3, //
    0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// GTP echo request - 3GPP TS 29.060
const GTP_PROBE: &[u8] = b"\x32\x01\x00\x04\x00\x00\x42\x00\x13\x37\x00\x00";

// STUN binding request - RFC 5389
const STUN_PROBE: &[u8] = &[
    0x00, 0x01, 0x00, 0x00, 0x21, 0x12, 0xa4, 0x42, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00,
];

// NAT-PMP external address request
const NATPMP_PROBE: &[u8] = b"\x00\x00";

// mDNS service discovery - RFC 6762
const MDNS_PROBE: &[u8] = b"\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\x09_services\x07_dns-sd\x04_udp\x05local\x00\x00\x0c\x00\x01";

// CoAP GET /.well-known/core - RFC 7252
const COAP_PROBE: &[u8] = b"\x40\x01\x01\xce\xbb.well-known\x04core";

// Memcached version - Memcached binary framing
const MEMCACHED_PROBE: &[u8] = b"\x00\x01\x00\x00\x00\x01\x00\x00version\r\n";

// Quake 3 engine getstatus
const QUAKE3_PROBE: &[u8] = b"\xff\xff\xff\xffgetstatus";

// Steam Source engine query
const STEAM_PROBE: &[u8] = b"\xff\xff\xff\xffTSource Engine Query\x00";

// SIP OPTIONS - RFC 3261
const SIP_PROBE: &[u8] = b"OPTIONS sip:nm SIP/2.0\r\nVia: SIP/2.0/UDP nm;branch=foo\r\nFrom: <sip:nm@nm>;tag=root\r\nTo: <sip:nm2@nm2>\r\nCall-ID: 50000\r\nCSeq: 42 OPTIONS\r\nMax-Forwards: 70\r\nContent-Length: 0\r\n\r\n";

// VxWorks WDB agent ping
const VXWORKS_PROBE: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x02, 0x55, 0x55, 0x55, 0x55, //
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0xff, 0xff, 0x55, 0x13, 0x00, 0x00, 0x00, 0x30, //
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// Kademlia ping
const KAD_PROBE: &[u8] = b"\xe4\x60";

// DCE/RPC endpoint mapper bind - MS-RPC
const DCERPC_PROBE: &[u8] = &[
    0x05, 0x00, 0x0b, 0x03, 0x10, 0x00, 0x00, 0x00, //
    0x48, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, //
    0xb8, 0x10, 0xb8, 0x10, 0x00, 0x00, 0x00, 0x00, //
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, //
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, //
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, //
    0xe7, 0x03, 0x00, 0x00, 0xfe, 0xdc, 0xba, 0x98, //
    0x76, 0x54, 0x32, 0x10, 0x01, 0x23, 0x45, 0x67, //
    0x89, 0xab, 0xcd, 0xef, 0xe7, 0x03, 0x00, 0x00,
];

/// The probe database, in lookup order. When multiple entries share a port
/// the first one wins, matching the registry's first-match convention.
pub const PROBES: &[ProbeEntry] = &[
    ProbeEntry { port: 7, service: "Echo", payload: ECHO_PROBE, reference: "RFC 862" },
    ProbeEntry { port: 53, service: "DNS", payload: DNS_STATUS_PROBE, reference: "RFC 1035" },
    ProbeEntry { port: 53, service: "DNS", payload: DNS_VERSION_PROBE, reference: "RFC 1035" },
    ProbeEntry { port: 67, service: "DHCP Server", payload: DHCP_PROBE, reference: "RFC 2131" },
    ProbeEntry { port: 68, service: "DHCP Client", payload: DHCP_PROBE, reference: "RFC 2131" },
    ProbeEntry { port: 69, service: "TFTP", payload: TFTP_PROBE, reference: "RFC 1350" },
    ProbeEntry { port: 111, service: "RPC/Portmap", payload: RPC_PROBE, reference: "RFC 1831" },
    ProbeEntry { port: 123, service: "NTP", payload: NTP_PROBE, reference: "RFC 5905" },
    ProbeEntry { port: 135, service: "MS-RPC", payload: DCERPC_PROBE, reference: "MS-RPC" },
    ProbeEntry { port: 137, service: "NetBIOS-NS", payload: NETBIOS_PROBE, reference: "RFC 1002" },
    ProbeEntry { port: 138, service: "NetBIOS-DGM", payload: NETBIOS_PROBE, reference: "RFC 1002" },
    ProbeEntry { port: 161, service: "SNMP", payload: SNMP_V1_PROBE, reference: "RFC 1157" },
    ProbeEntry { port: 162, service: "SNMP Trap", payload: SNMP_V1_PROBE, reference: "RFC 1157" },
    ProbeEntry { port: 177, service: "XDMCP", payload: XDMCP_PROBE, reference: "X11" },
    ProbeEntry { port: 389, service: "CLDAP", payload: CLDAP_PROBE, reference: "RFC 1798" },
    ProbeEntry { port: 427, service: "SLP", payload: SLP_PROBE, reference: "RFC 2608" },
    ProbeEntry { port: 443, service: "DTLS", payload: DTLS_PROBE, reference: "RFC 6347" },
    ProbeEntry { port: 500, service: "IKE/IPSec", payload: IKE_PROBE, reference: "RFC 2409" },
    ProbeEntry { port: 514, service: "Syslog", payload: EMPTY_PROBE, reference: "RFC 5424" },
    ProbeEntry { port: 520, service: "RIP", payload: RIP_PROBE, reference: "RFC 2453" },
    ProbeEntry { port: 623, service: "IPMI", payload: IPMI_PROBE, reference: "IPMI" },
    ProbeEntry { port: 1194, service: "OpenVPN", payload: OPENVPN_PROBE, reference: "OpenVPN" },
    ProbeEntry { port: 1604, service: "Citrix", payload: CITRIX_PROBE, reference: "Citrix ICA" },
    ProbeEntry { port: 1645, service: "RADIUS", payload: RADIUS_PROBE, reference: "RFC 2865" },
    ProbeEntry { port: 1701, service: "L2TP", payload: L2TP_PROBE, reference: "RFC 2661" },
    ProbeEntry { port: 1812, service: "RADIUS", payload: RADIUS_PROBE, reference: "RFC 2865" },
    ProbeEntry { port: 1900, service: "SSDP/UPnP", payload: SSDP_PROBE, reference: "UPnP" },
    ProbeEntry { port: 2049, service: "NFS", payload: NFS_PROBE, reference: "RFC 1094" },
    ProbeEntry { port: 2123, service: "GTP-C", payload: GTP_PROBE, reference: "3GPP" },
    ProbeEntry { port: 2152, service: "GTP-U", payload: GTP_PROBE, reference: "3GPP" },
    ProbeEntry { port: 3478, service: "STUN", payload: STUN_PROBE, reference: "RFC 5389" },
    ProbeEntry { port: 3784, service: "Ventrilo", payload: EMPTY_PROBE, reference: "Ventrilo" },
    ProbeEntry { port: 4500, service: "IPSec NAT-T", payload: IKE_PROBE, reference: "RFC 3947" },
    ProbeEntry { port: 4665, service: "eDonkey", payload: KAD_PROBE, reference: "Kademlia" },
    ProbeEntry { port: 5060, service: "SIP", payload: SIP_PROBE, reference: "RFC 3261" },
    ProbeEntry { port: 5351, service: "NAT-PMP", payload: NATPMP_PROBE, reference: "NAT-PMP" },
    ProbeEntry { port: 5353, service: "mDNS", payload: MDNS_PROBE, reference: "RFC 6762" },
    ProbeEntry { port: 5683, service: "CoAP", payload: COAP_PROBE, reference: "RFC 7252" },
    ProbeEntry { port: 6481, service: "STDiscovery", payload: EMPTY_PROBE, reference: "Sun ST" },
    ProbeEntry { port: 8767, service: "TeamSpeak2", payload: EMPTY_PROBE, reference: "TeamSpeak" },
    ProbeEntry { port: 9987, service: "TeamSpeak3", payload: EMPTY_PROBE, reference: "TeamSpeak" },
    ProbeEntry { port: 10080, service: "Amanda", payload: EMPTY_PROBE, reference: "Amanda" },
    ProbeEntry { port: 11211, service: "Memcached", payload: MEMCACHED_PROBE, reference: "Memcached" },
    ProbeEntry { port: 17185, service: "VxWorks", payload: VXWORKS_PROBE, reference: "VxWorks" },
    ProbeEntry { port: 26000, service: "Quake3", payload: QUAKE3_PROBE, reference: "Quake" },
    ProbeEntry { port: 27015, service: "Steam", payload: STEAM_PROBE, reference: "Source" },
    ProbeEntry { port: 27960, service: "Quake3", payload: QUAKE3_PROBE, reference: "Quake" },
    ProbeEntry { port: 64738, service: "Mumble", payload: EMPTY_PROBE, reference: "Mumble" },
];

/// All catalog entries for a port, in table order.
///
/// Pure and deterministic; repeated calls return identical results.
pub fn lookup(port: u16) -> impl Iterator<Item = &'static ProbeEntry> {
    PROBES.iter().filter(move |entry| entry.port == port)
}

/// The probe used for a port: the first matching entry, if any.
pub fn select(port: u16) -> Option<&'static ProbeEntry> {
    lookup(port).next()
}

/// Payload to send to a port. Ports without an entry get the empty probe.
pub fn payload_for(port: u16) -> &'static [u8] {
    select(port).map(|entry| entry.payload).unwrap_or(EMPTY_PROBE)
}

/// Service label for a port, or "unknown" when the catalog has no entry.
pub fn service_label(port: u16) -> &'static str {
    select(port).map(|entry| entry.service).unwrap_or("unknown")
}

/// Protocol reference for a port, empty when unknown.
pub fn reference_for(port: u16) -> &'static str {
    select(port).map(|entry| entry.reference).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_deterministic() {
        for port in [7u16, 53, 161, 12345] {
            let first: Vec<_> = lookup(port).map(|e| e.payload).collect();
            let second: Vec<_> = lookup(port).map(|e| e.payload).collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_first_match_wins_for_dns() {
        // Port 53 has two probe variants; the status request comes first.
        let entries: Vec<_> = lookup(53).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(select(53).unwrap().payload, DNS_STATUS_PROBE);
        assert_eq!(payload_for(53).len(), 12);
    }

    #[test]
    fn test_unknown_port_degrades_to_empty_probe() {
        assert!(select(12345).is_none());
        assert_eq!(payload_for(12345), EMPTY_PROBE);
        assert_eq!(service_label(12345), "unknown");
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(service_label(123), "NTP");
        assert_eq!(service_label(5060), "SIP");
        assert_eq!(reference_for(161), "RFC 1157");
    }

    #[test]
    fn test_empty_probes_are_valid_entries() {
        // Syslog has an entry with a deliberately empty payload.
        let entry = select(514).unwrap();
        assert!(entry.payload.is_empty());
        assert_eq!(entry.service, "Syslog");
    }

    #[test]
    fn test_payload_sizes_match_protocol_headers() {
        assert_eq!(payload_for(123).len(), 48); // NTP packet
        assert_eq!(payload_for(67).len(), 240); // BOOTP frame
        assert_eq!(payload_for(3478).len(), 20); // STUN header
    }
}
