//! Bundled demo network: the Montreux–Oberland-Bernois (MOB) line from
//! Montreux to Zweisimmen with its branches to Lenk and Interlaken Ost, plus
//! the Vevey–Blonay–Chamby (MVR-ce) line joining it at Chamby.
//!
//! Every listed segment is bidirectional.

use crate::{LoadOptions, Network, NetworkResult, load_network_reader};

const STATIONS_CSV: &str = "\
id,code,name
1,ALLI,Allières
2,AVA,Les Avants
3,BCHX,Bois-de-Chexbres
4,BEMM,Belmont-sur-Mx
5,BLB,Blankenburg
6,BLON,Blonay
7,BODE,Boden
8,CABY,Chamby
9,CASE,Les Cases
10,CAUX,Caux
11,CGE,Montreux-Collège
12,CHAL,Châtelard VD
13,CHAN,Chantemerle-près-Blonay
14,CHAU,La Chaudanne-Les Moulins
15,CHBL,Château-de-Blonay
16,CHCO,Chaulin-Cornaux
17,CHER,Chernex
18,CHEV,Les Chevalleyres
19,CHIZ,La Chiésaz
20,CHOE,Château-d'Oex
21,CHTV,Château-d'Hauteville
22,CLIE,Clies
23,COLD,Colondalles
24,COMS,Les Combes
25,CRDB,Crêt-d'y-Bau
26,ECTS,Les Echets
27,FAY,Fayaux
28,FLED,Flendruz
29,FON,Fontanivent
30,VVVI,Vevey Vignerons
36,GST,Gstaad
43,LENK,Lenk im Simmental
45,MTB,Montbovon
46,MX,Montreux
58,ROSI,Rossinière
59,ROU,Rougemont
60,SAAN,Saanen
64,SDY,Sendy-Sollard
65,SONZ,Sonzier
76,VV,Vevey
77,ZW,Zweisimmen
78,BOSQ,Bosquets
101,SP,Spiez
108,IO,Interlaken Ost
";

const SEGMENTS_CSV: &str = "\
from,to,distance_km
MX,CGE,0.65
CGE,BEMM,0.86
BEMM,COLD,0.24
COLD,CHAL,0.40
CHAL,FON,1.13
FON,CHER,1.01
CHER,SONZ,1.18
SONZ,CABY,1.68
CABY,SDY,2.05
SDY,AVA,1.65
AVA,MTB,7.00
MTB,ROSI,7.80
ROSI,CHAU,1.15
CHAU,CHOE,3.29
CHOE,ROU,4.74
ROU,SAAN,4.04
SAAN,GST,2.40
GST,ZW,12.84
ZW,LENK,16.86
ZW,SP,35.00
SP,IO,18.00
VV,BOSQ,0.53
BOSQ,VVVI,0.97
VVVI,CLIE,0.27
CLIE,CHTV,1.25
CHTV,BLON,1.87
BLON,CHAN,0.97
CHAN,CABY,1.98
";

/// Build the bundled demo network.
pub fn demo_network() -> NetworkResult<Network> {
    load_network_reader(
        STATIONS_CSV.as_bytes(),
        SEGMENTS_CSV.as_bytes(),
        &LoadOptions { bidirectional: true },
    )
}
